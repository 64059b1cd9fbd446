use actix_web::http::StatusCode;

use crate::error::AppError;
use crate::errors::{
    ConflictKind, DomainError, ErrorCode, InfraErrorKind, NotFoundKind, ValidationKind,
};

#[test]
fn validation_maps_to_422_with_kind_code() {
    let domain = DomainError::validation(
        ValidationKind::PositionOutOfRange,
        "position must be between 1 and 20",
    );
    let app: AppError = domain.into();
    assert_eq!(app.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(app.code(), ErrorCode::PositionOutOfRange);
    assert_eq!(app.detail(), "position must be between 1 and 20");
}

#[test]
fn roster_full_keeps_count_field() {
    let kind = ValidationKind::RosterFull;
    assert_eq!(kind.field(), "count");
    let app: AppError = DomainError::validation(kind, "the roster already has 6 players").into();
    assert_eq!(app.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(app.code(), ErrorCode::RosterFull);
}

#[test]
fn conflict_maps_to_409() {
    let app: AppError =
        DomainError::conflict(ConflictKind::RulesAlreadyExist, "rules already exist").into();
    assert_eq!(app.status(), StatusCode::CONFLICT);
    assert_eq!(app.code(), ErrorCode::RulesAlreadyExist);
}

#[test]
fn not_found_maps_to_404() {
    let app: AppError = DomainError::not_found(NotFoundKind::Player, "player 7 not found").into();
    assert_eq!(app.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.code(), ErrorCode::PlayerNotFound);
}

#[test]
fn infra_timeout_maps_to_504() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "statement timeout").into();
    assert_eq!(app.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(app.code(), ErrorCode::DbTimeout);
    assert!(matches!(app, AppError::Timeout { .. }));
}

#[test]
fn infra_unavailable_maps_to_503() {
    let app: AppError =
        DomainError::infra(InfraErrorKind::DbUnavailable, "connection refused").into();
    assert_eq!(app.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(app.code(), ErrorCode::DbUnavailable);
}

#[test]
fn infra_other_maps_to_500() {
    let app: AppError =
        DomainError::infra(InfraErrorKind::Other("oops".into()), "unexpected failure").into();
    assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.code(), ErrorCode::InternalError);
}

#[test]
fn validation_other_uses_generic_code() {
    let app: AppError =
        DomainError::validation(ValidationKind::Other("weird".into()), "weird input").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
