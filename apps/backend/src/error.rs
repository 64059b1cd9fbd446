//! Application error type and its HTTP rendering.
//!
//! `AppError` is the single error type handlers return. Every variant maps to
//! a status code and a stable [`ErrorCode`], and renders as an RFC 7807
//! `application/problem+json` body carrying the current trace id.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::errors::{DomainError, ErrorCode, InfraErrorKind};
use crate::web::trace_ctx;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },

    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },

    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },

    #[error("Unauthorized: {detail}")]
    Unauthorized { code: ErrorCode, detail: String },

    #[error("Forbidden: {detail}")]
    Forbidden { code: ErrorCode, detail: String },

    #[error("Bad request: {detail}")]
    BadRequest { detail: String },

    #[error("Database timeout: {detail}")]
    Timeout { detail: String },

    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },

    #[error("Database error: {detail}")]
    Db { detail: String },

    #[error("Configuration error: {detail}")]
    Config { detail: String },

    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn validation(code: ErrorCode, detail: impl Into<String>) -> Self {
        AppError::Validation { code, detail: detail.into() }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        AppError::Conflict { code, detail: detail.into() }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        AppError::NotFound { code, detail: detail.into() }
    }

    pub fn unauthorized(code: ErrorCode, detail: impl Into<String>) -> Self {
        AppError::Unauthorized { code, detail: detail.into() }
    }

    pub fn unauthorized_missing_bearer() -> Self {
        AppError::Unauthorized {
            code: ErrorCode::UnauthorizedMissingBearer,
            detail: "Missing or invalid bearer token".to_string(),
        }
    }

    pub fn forbidden(code: ErrorCode, detail: impl Into<String>) -> Self {
        AppError::Forbidden { code, detail: detail.into() }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        AppError::BadRequest { detail: detail.into() }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        AppError::Db { detail: detail.into() }
    }

    pub fn db_unavailable() -> Self {
        AppError::DbUnavailable {
            detail: "Database unavailable".to_string(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        AppError::Config { detail: detail.into() }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        AppError::Internal { detail: detail.into() }
    }

    /// Stable machine-readable code for the `code` field of the problem body.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Unauthorized { code, .. }
            | AppError::Forbidden { code, .. } => *code,
            AppError::BadRequest { .. } => ErrorCode::BadRequest,
            AppError::Timeout { .. } => ErrorCode::DbTimeout,
            AppError::DbUnavailable { .. } => ErrorCode::DbUnavailable,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::InternalError,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::DbUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Db { .. } | AppError::Config { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Unauthorized { detail, .. }
            | AppError::Forbidden { detail, .. }
            | AppError::BadRequest { detail }
            | AppError::Timeout { detail }
            | AppError::DbUnavailable { detail }
            | AppError::Db { detail }
            | AppError::Config { detail }
            | AppError::Internal { detail } => detail,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => AppError::Validation {
                code: kind.code(),
                detail,
            },
            DomainError::Conflict(kind, detail) => AppError::Conflict {
                code: kind.code(),
                detail,
            },
            DomainError::NotFound(kind, detail) => AppError::NotFound {
                code: kind.code(),
                detail,
            },
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::Timeout => AppError::Timeout { detail },
                InfraErrorKind::DbUnavailable => AppError::DbUnavailable { detail },
                InfraErrorKind::Other(_) => AppError::Internal { detail },
            },
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        crate::infra::db_errors::map_db_err(err).into()
    }
}

/// RFC 7807 problem body.
#[derive(Serialize, Debug)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Turns an error code into a human-readable title.
/// `ROSTER_FULL` becomes `Roster Full`.
fn humanize_code(code: ErrorCode) -> String {
    code.as_str()
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            tracing::error!(code = %code, detail = %self.detail(), "request failed");
        } else {
            tracing::warn!(code = %code, detail = %self.detail(), "request rejected");
        }

        let problem = ProblemDetails {
            problem_type: format!("https://tabula.app/errors/{code}"),
            title: humanize_code(code),
            status: status.as_u16(),
            detail: self.detail().to_string(),
            code: code.to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_turns_code_into_title() {
        assert_eq!(humanize_code(ErrorCode::RosterFull), "Roster Full");
        assert_eq!(humanize_code(ErrorCode::DbTimeout), "Db Timeout");
        assert_eq!(
            humanize_code(ErrorCode::UnauthorizedMissingBearer),
            "Unauthorized Missing Bearer"
        );
    }
}
