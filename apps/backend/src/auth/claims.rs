//! JWT claims carried by access tokens and request extensions.

use serde::{Deserialize, Serialize};

/// Claims in the access tokens this backend accepts. The identity middleware
/// inserts the verified claims into request extensions.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Username the token was issued to.
    pub sub: String,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiry (seconds since epoch).
    pub exp: i64,
}
