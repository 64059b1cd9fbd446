//! Bearer token helpers for tests.

use std::time::{Duration, SystemTime};

use crate::auth::jwt::mint_access_token;
use crate::state::security_config::SecurityConfig;

/// Token for the given subject, signed with the state's secret.
pub fn mint_test_token(sub: &str, security: &SecurityConfig) -> String {
    mint_access_token(sub, SystemTime::now(), security).expect("should mint token successfully")
}

/// Full `Authorization` header value including the `Bearer ` prefix.
pub fn bearer_header(sub: &str, security: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(sub, security))
}

/// Already-expired token for rejection tests.
pub fn mint_expired_token(sub: &str, security: &SecurityConfig) -> String {
    let past = SystemTime::now()
        .checked_sub(Duration::from_secs(7200))
        .expect("clock before epoch");
    mint_access_token(sub, past, security).expect("should mint expired token successfully")
}
