//! Stable machine-readable error codes.
//!
//! Codes are part of the HTTP contract: clients match on the `code` field of
//! a problem response, so variants may be added but never renamed.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Auth.
    UnauthorizedMissingBearer,
    UnauthorizedInvalidJwt,
    UnauthorizedExpiredJwt,
    Unauthorized,
    ForbiddenNotAdmin,

    // Validation.
    PositionOutOfRange,
    RosterFull,
    TaskIdOutOfRange,
    NoFreeTaskSlot,
    InvalidName,
    ValidationError,
    BadRequest,

    // Not found.
    PlayerNotFound,
    TaskNotFound,
    RulesNotFound,
    NotFound,

    // Conflict.
    RulesAlreadyExist,
    TaskSlotTaken,
    Conflict,

    // Infrastructure.
    DbTimeout,
    DbUnavailable,
    DbError,
    ConfigError,
    InternalError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            ErrorCode::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            ErrorCode::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::ForbiddenNotAdmin => "FORBIDDEN_NOT_ADMIN",
            ErrorCode::PositionOutOfRange => "POSITION_OUT_OF_RANGE",
            ErrorCode::RosterFull => "ROSTER_FULL",
            ErrorCode::TaskIdOutOfRange => "TASK_ID_OUT_OF_RANGE",
            ErrorCode::NoFreeTaskSlot => "NO_FREE_TASK_SLOT",
            ErrorCode::InvalidName => "INVALID_NAME",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::TaskNotFound => "TASK_NOT_FOUND",
            ErrorCode::RulesNotFound => "RULES_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::RulesAlreadyExist => "RULES_ALREADY_EXIST",
            ErrorCode::TaskSlotTaken => "TASK_SLOT_TAKEN",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::DbTimeout => "DB_TIMEOUT",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_screaming_snake_case() {
        let codes = [
            ErrorCode::UnauthorizedMissingBearer,
            ErrorCode::PositionOutOfRange,
            ErrorCode::RosterFull,
            ErrorCode::TaskSlotTaken,
            ErrorCode::DbTimeout,
            ErrorCode::InternalError,
        ];
        for code in codes {
            let s = code.as_str();
            assert!(!s.is_empty());
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "code {s} is not SCREAMING_SNAKE_CASE"
            );
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ErrorCode::RosterFull.to_string(), "ROSTER_FULL");
        assert_eq!(ErrorCode::DbTimeout.to_string(), ErrorCode::DbTimeout.as_str());
    }
}
