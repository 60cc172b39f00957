//! Schemas over untyped input.
//!
//! Form state and network payloads arrive as `serde_json::Value`; the
//! schemas here turn them into typed domain values or fail with every
//! invalid field listed ([`ValidationErrors`]). The [`clean`] pass is the
//! separate pre-transmission normalization step.

mod auth;
mod clean;
mod restaurant;

use serde_json::Value;

use crate::domain::ValidationErrors;

pub use auth::{LoginInput, RegisterInput};
pub use clean::clean;

/// Parse contract shared by every schema.
///
/// Both entry points return `Result`; `safe_parse` is a synonym kept for
/// callers that want the non-throwing intent spelled out.
pub trait Schema: Sized {
    /// Converts untyped input into a typed value, reporting every invalid
    /// field at once.
    fn parse(input: &Value) -> Result<Self, ValidationErrors>;

    /// Identical to [`Schema::parse`].
    fn safe_parse(input: &Value) -> Result<Self, ValidationErrors> {
        Self::parse(input)
    }
}

/// RFC-822-ish email check: non-empty local part, a dotted domain, no
/// whitespace. Deliberately permissive, matching the form-level check the
/// backend mirrors.
pub(crate) fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Absolute URL with a host.
pub(crate) fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).map(|u| u.has_host()).unwrap_or(false)
}

/// `HH:MM` shape check. Shape only, no range validation: `"25:99"`
/// passes.
pub(crate) fn is_hh_mm(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b':'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}
