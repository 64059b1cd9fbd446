//! Task-local trace context.
//!
//! Middleware establishes a trace id scope per request; error rendering and
//! log lines read it back without threading it through every signature.

use std::cell::RefCell;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Trace id for the current task, or "unknown" outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| {
            cell.borrow()
                .as_ref()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string())
        })
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future with the given trace id in scope.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn falls_back_to_unknown_outside_scope() {
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn scope_carries_and_restores_trace_id() {
        let id = "trace-abc".to_string();
        let out = with_trace_id(id.clone(), async {
            assert_eq!(trace_id(), id);
            7
        })
        .await;
        assert_eq!(out, 7);
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn inner_scope_shadows_outer() {
        with_trace_id("outer".to_string(), async {
            with_trace_id("inner".to_string(), async {
                assert_eq!(trace_id(), "inner");
            })
            .await;
            assert_eq!(trace_id(), "outer");
        })
        .await;
    }
}
