//! Task slot administration routes.
//!
//! There is deliberately no DELETE here: slots are permanent, only their
//! descriptions change.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::admin_identity::AdminIdentity;
use crate::repos::tasks::Task;
use crate::services::tasks::TasksService;
use crate::state::app_state::AppState;

/// Characters shown in list previews before truncation.
const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Serialize)]
struct TaskResponse {
    id: i32,
    description: String,
    preview: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        let preview = preview(&task.description);
        Self {
            id: task.id,
            description: task.description,
            preview,
        }
    }
}

#[derive(Debug, Serialize)]
struct TaskListResponse {
    tasks: Vec<TaskResponse>,
}

#[derive(Debug, Deserialize)]
struct CreateTaskBody {
    id: Option<i32>,
    description: String,
}

#[derive(Debug, Deserialize)]
struct TaskDescriptionBody {
    description: String,
}

fn preview(description: &str) -> String {
    if description.chars().count() > PREVIEW_CHARS {
        let head: String = description.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        description.to_owned()
    }
}

/// GET /admin/api/tasks
///
/// Backfills missing slots first, so the list always shows the full fixed
/// range even on a database that predates a slot-count increase.
async fn list_tasks(
    http_req: HttpRequest,
    _admin: AdminIdentity,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let service = TasksService::new(app_state.game.clone());

    let tasks = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            service.ensure_complete(txn).await?;
            Ok(service.list(txn).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskResponse::from).collect(),
    }))
}

/// POST /admin/api/tasks
///
/// With an `id` the slot must be free; without one the lowest free slot is
/// assigned, as the original console did.
async fn create_task(
    http_req: HttpRequest,
    _admin: AdminIdentity,
    app_state: web::Data<AppState>,
    body: web::Json<CreateTaskBody>,
) -> Result<HttpResponse, AppError> {
    let service = TasksService::new(app_state.game.clone());
    let body = body.into_inner();

    let task = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(service.create(txn, body.id, &body.description).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(TaskResponse::from(task)))
}

/// GET /admin/api/tasks/{id}
async fn get_task(
    http_req: HttpRequest,
    _admin: AdminIdentity,
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = TasksService::new(app_state.game.clone());

    let task = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(service.get(txn, id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(TaskResponse::from(task)))
}

/// PUT /admin/api/tasks/{id}
async fn update_task(
    http_req: HttpRequest,
    _admin: AdminIdentity,
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
    body: web::Json<TaskDescriptionBody>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = TasksService::new(app_state.game.clone());
    let body = body.into_inner();

    let task = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(service.update(txn, id, &body.description).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(TaskResponse::from(task)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/tasks")
            .route(web::get().to(list_tasks))
            .route(web::post().to(create_task)),
    );
    cfg.service(
        web::resource("/tasks/{id}")
            .route(web::get().to(get_task))
            .route(web::put().to(update_task)),
    );
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn short_descriptions_pass_through() {
        assert_eq!(preview("wash the dishes"), "wash the dishes");
        assert_eq!(preview(""), "");
    }

    #[test]
    fn exactly_fifty_chars_is_not_truncated() {
        let text = "x".repeat(50);
        assert_eq!(preview(&text), text);
    }

    #[test]
    fn long_descriptions_are_truncated_with_ellipsis() {
        let text = "y".repeat(51);
        let got = preview(&text);
        assert_eq!(got, format!("{}...", "y".repeat(50)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "ё".repeat(60);
        let got = preview(&text);
        assert_eq!(got.chars().count(), 53);
        assert!(got.ends_with("..."));
    }
}
