//! Domain error taxonomy.
//!
//! Services and repos return `DomainError`; the web layer converts it into
//! `AppError` (and from there into an RFC 7807 problem response). Keeping the
//! domain variants free of HTTP concerns lets the same services back both the
//! public read endpoint and the admin API.

use crate::errors::ErrorCode;

/// Validation failures on caller-supplied input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationKind {
    /// Player position outside the configured range.
    PositionOutOfRange,
    /// Roster already holds the maximum number of players.
    RosterFull,
    /// Task id outside the fixed slot range.
    TaskIdOutOfRange,
    /// Every task slot in the range is already occupied.
    NoFreeTaskSlot,
    /// Player name is empty or exceeds the column length.
    InvalidName,
    /// Free-form validation failure.
    Other(String),
}

impl ValidationKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationKind::PositionOutOfRange => ErrorCode::PositionOutOfRange,
            ValidationKind::RosterFull => ErrorCode::RosterFull,
            ValidationKind::TaskIdOutOfRange => ErrorCode::TaskIdOutOfRange,
            ValidationKind::NoFreeTaskSlot => ErrorCode::NoFreeTaskSlot,
            ValidationKind::InvalidName => ErrorCode::InvalidName,
            ValidationKind::Other(_) => ErrorCode::ValidationError,
        }
    }

    /// The request field the failure is attributed to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationKind::PositionOutOfRange => "position",
            ValidationKind::RosterFull => "count",
            ValidationKind::TaskIdOutOfRange => "id",
            ValidationKind::NoFreeTaskSlot => "id",
            ValidationKind::InvalidName => "name",
            ValidationKind::Other(_) => "request",
        }
    }
}

/// Conflicts with existing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// The rules row already exists; there is only ever one.
    RulesAlreadyExist,
    /// Another writer claimed the task slot first.
    TaskSlotTaken,
    /// Free-form conflict.
    Other(String),
}

impl ConflictKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConflictKind::RulesAlreadyExist => ErrorCode::RulesAlreadyExist,
            ConflictKind::TaskSlotTaken => ErrorCode::TaskSlotTaken,
            ConflictKind::Other(_) => ErrorCode::Conflict,
        }
    }
}

/// Lookups that came up empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundKind {
    Player,
    Task,
    Rules,
    Other(String),
}

impl NotFoundKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            NotFoundKind::Player => ErrorCode::PlayerNotFound,
            NotFoundKind::Task => ErrorCode::TaskNotFound,
            NotFoundKind::Rules => ErrorCode::RulesNotFound,
            NotFoundKind::Other(_) => ErrorCode::NotFound,
        }
    }
}

/// Infrastructure failures surfaced by the database layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfraErrorKind {
    /// The database did not respond within the configured deadline.
    Timeout,
    /// Connection refused, pool exhausted, or the server went away.
    DbUnavailable,
    /// Free-form infrastructure failure.
    Other(String),
}

/// Error type returned by services and repos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    Validation(ValidationKind, String),
    Conflict(ConflictKind, String),
    NotFound(NotFoundKind, String),
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        DomainError::Validation(kind, detail.into())
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        DomainError::Conflict(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        DomainError::NotFound(kind, detail.into())
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        DomainError::Infra(kind, detail.into())
    }

    /// Validation failure with no dedicated kind.
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        DomainError::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d)
            | DomainError::Conflict(_, d)
            | DomainError::NotFound(_, d)
            | DomainError::Infra(_, d) => d,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Validation(_, d) => write!(f, "validation error: {d}"),
            DomainError::Conflict(_, d) => write!(f, "conflict: {d}"),
            DomainError::NotFound(_, d) => write!(f, "not found: {d}"),
            DomainError::Infra(_, d) => write!(f, "infrastructure error: {d}"),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        crate::infra::db_errors::map_db_err(e)
    }
}
