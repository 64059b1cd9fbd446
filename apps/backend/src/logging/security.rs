//! Security-relevant audit events, logged with a stable `event` field so they
//! can be alerted on independently of free-text messages.

use tracing::warn;

use crate::logging::pii::Redacted;
use crate::web::trace_ctx;

/// A request presented a token that failed verification.
pub fn token_rejected(reason: &str) {
    let trace_id = trace_ctx::trace_id();
    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        reason = %Redacted(reason),
        "Token verification failure"
    );
}

/// An authenticated identity was turned away from the admin area.
pub fn admin_access_denied(username: &str, path: &str) {
    let trace_id = trace_ctx::trace_id();
    warn!(
        event = "SECURITY_ADMIN_ACCESS_DENIED",
        %trace_id,
        username,
        path,
        "Non-admin identity attempted admin access"
    );
}
