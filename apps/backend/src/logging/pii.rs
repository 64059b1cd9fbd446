//! Redaction for log lines that may carry raw error strings.
//!
//! Database and auth errors can embed bearer tokens or signatures. Anything
//! logged through [`Redacted`] has long opaque token runs masked before it
//! reaches the log sink.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

fn base64_token() -> &'static Regex {
    static BASE64_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9+/_-]{16,}={0,2}\b").unwrap()
    });
    &BASE64_TOKEN_REGEX
}

fn hex_token() -> &'static Regex {
    static HEX_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Fa-f0-9]{16,}\b").unwrap()
    });
    &HEX_TOKEN_REGEX
}

/// Mask opaque token runs (base64-like or hex, 16 chars and up).
pub fn redact(input: &str) -> String {
    let pass = base64_token().replace_all(input, "[REDACTED_TOKEN]");
    hex_token().replace_all(&pass, "[REDACTED_TOKEN]").to_string()
}

/// Wrapper that redacts on Display/Debug, for ergonomic use in log macros.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_jwt_like_tokens() {
        assert_eq!(
            redact("verify failed for eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"),
            "verify failed for [REDACTED_TOKEN]"
        );
    }

    #[test]
    fn masks_hex_runs() {
        assert_eq!(
            redact("a1b2c3d4e5f678901234567890123456"),
            "[REDACTED_TOKEN]"
        );
    }

    #[test]
    fn leaves_short_and_plain_strings_alone() {
        assert_eq!(redact("short123"), "short123");
        assert_eq!(redact("duplicate key value"), "duplicate key value");
        assert_eq!(redact(""), "");
    }

    #[test]
    fn redacted_wrapper_formats_masked() {
        let wrapped = Redacted("token eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
        assert_eq!(format!("{wrapped}"), "token [REDACTED_TOKEN]");
        assert_eq!(format!("{wrapped:?}"), "token [REDACTED_TOKEN]");
    }
}
