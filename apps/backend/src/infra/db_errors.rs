//! SeaORM -> DomainError translation.
//!
//! Repos convert `sea_orm::DbErr` into `DomainError` here; the web layer then
//! maps `DomainError` to `AppError` via `From`. Raw driver messages are logged
//! through [`Redacted`] and never forwarded to clients.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::web::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let rest = error_msg
        .split("UNIQUE constraint failed: ")
        .nth(1)?;
    rest.split_whitespace().next()
}

/// Map a violated unique constraint to a domain conflict.
///
/// Covers both SQLite's table.column spelling and Postgres constraint names.
fn map_unique_violation(error_msg: &str, table_column: Option<&str>) -> (ConflictKind, &'static str) {
    match table_column {
        Some("tasks.id") => return (ConflictKind::TaskSlotTaken, "Task slot already occupied"),
        Some("rules.id") => return (ConflictKind::RulesAlreadyExist, "Rules already exist"),
        _ => {}
    }
    if error_msg.contains("tasks_pkey") {
        return (ConflictKind::TaskSlotTaken, "Task slot already occupied");
    }
    if error_msg.contains("rules_pkey") {
        return (ConflictKind::RulesAlreadyExist, "Rules already exist");
    }
    (
        ConflictKind::Other("Unique".into()),
        "Unique constraint violation",
    )
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        let table_column = extract_sqlite_table_column(&error_msg);
        let (kind, detail) = map_unique_violation(&error_msg, table_column);
        return DomainError::conflict(kind, detail);
    }

    if mentions_sqlstate(&error_msg, "23503") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Check constraint violation");
        return DomainError::validation_other("Check constraint violation");
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_task_slot_unique_maps_to_conflict() {
        let err = sea_orm::DbErr::Custom(
            "Execution Error: UNIQUE constraint failed: tasks.id".to_string(),
        );
        let mapped = map_db_err(err);
        assert!(matches!(
            mapped,
            DomainError::Conflict(ConflictKind::TaskSlotTaken, _)
        ));
    }

    #[test]
    fn postgres_rules_pkey_maps_to_conflict() {
        let err = sea_orm::DbErr::Custom(
            "duplicate key value violates unique constraint \"rules_pkey\"".to_string(),
        );
        let mapped = map_db_err(err);
        assert!(matches!(
            mapped,
            DomainError::Conflict(ConflictKind::RulesAlreadyExist, _)
        ));
    }

    #[test]
    fn unknown_unique_violation_falls_back() {
        let err = sea_orm::DbErr::Custom(
            "UNIQUE constraint failed: players.secret".to_string(),
        );
        let mapped = map_db_err(err);
        assert!(matches!(
            mapped,
            DomainError::Conflict(ConflictKind::Other(_), _)
        ));
    }

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = sea_orm::DbErr::RecordNotFound("players.id not found".to_string());
        let mapped = map_db_err(err);
        assert!(matches!(mapped, DomainError::NotFound(_, _)));
    }

    #[test]
    fn timeout_message_maps_to_infra_timeout() {
        let err = sea_orm::DbErr::Custom("connection pool timeout".to_string());
        let mapped = map_db_err(err);
        assert!(matches!(
            mapped,
            DomainError::Infra(InfraErrorKind::Timeout, _)
        ));
    }
}
