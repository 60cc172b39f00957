//! Normalized API errors.
//!
//! The backend reports failures in several shapes; all of them funnel
//! into [`ApiError`] with a best-effort message. 401 and 404 get their
//! own variants because callers treat them structurally (session reset,
//! not-found page), everything else is surfaced verbatim.

use serde_json::Value;
use thiserror::Error;

use crate::ports::{HttpResponse, TransportError};
use crate::session::SessionError;

/// Normalized failure of an API operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401. The 401 recovery side-effects have already run by the
    /// time the caller sees this.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// HTTP 404, surfaced distinctly so the UI can render a not-found
    /// state (public slug lookups in particular).
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Any other non-2xx response.
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    /// No response was received at all.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// The response was fine but persisting the resulting session failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// The HTTP status, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Normalizes a non-2xx response.
    pub(crate) fn from_response(response: &HttpResponse) -> Self {
        let (message, details) = extract_message(response);
        match response.status {
            401 => ApiError::Unauthorized { message },
            404 => ApiError::NotFound { message },
            status => ApiError::Http {
                status,
                message,
                details,
            },
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        ApiError::Transport(error.to_string())
    }
}

/// Pulls a human-readable message out of any of the error body shapes
/// the backend produces: `{error:{message}}`, `{error: "..."}`,
/// `{message: "..."}`, or a plain string body.
fn extract_message(response: &HttpResponse) -> (String, Option<Value>) {
    let text = response.body_text();
    let fallback = || format!("Request failed with status {}", response.status);

    let Ok(parsed) = serde_json::from_str::<Value>(&text) else {
        let trimmed = text.trim();
        let message = if trimmed.is_empty() {
            fallback()
        } else {
            trimmed.to_string()
        };
        return (message, None);
    };

    let message = match &parsed {
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => obj
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .or_else(|| obj.get("error").and_then(Value::as_str))
            .or_else(|| obj.get("message").and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    };

    (message.unwrap_or_else(fallback), Some(parsed))
}
