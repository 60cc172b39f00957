//! Field-level validation errors for the domain layer.
//!
//! Schemas report every invalid field at once; each failure carries the
//! dotted path into the input (`"contacts.email"`, `"hours.monday.open"`),
//! a machine-readable code, and a human-readable message. Callers decide
//! whether to surface errors per-field or aggregated.

use std::fmt;

use thiserror::Error;

/// Machine-readable failure codes, organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCode {
    /// A required field is missing or empty.
    Required,
    /// A string is shorter than its minimum length.
    TooShort,
    /// A string exceeds its maximum length.
    TooLong,
    /// The value is not a syntactically valid email address.
    InvalidEmail,
    /// The value is not an absolute URL.
    InvalidUrl,
    /// The value has the wrong JSON type (e.g. string where bool expected).
    InvalidType,
    /// The value fails a format constraint (e.g. `HH:MM` time strings).
    InvalidFormat,
    /// A reference points at an entity that does not exist in the payload.
    UnknownReference,
}

impl FieldCode {
    /// Stable string form used on the wire and in test assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldCode::Required => "required",
            FieldCode::TooShort => "too_short",
            FieldCode::TooLong => "too_long",
            FieldCode::InvalidEmail => "invalid_email",
            FieldCode::InvalidUrl => "invalid_url",
            FieldCode::InvalidType => "invalid_type",
            FieldCode::InvalidFormat => "invalid_format",
            FieldCode::UnknownReference => "unknown_reference",
        }
    }
}

impl fmt::Display for FieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One invalid field: where, what kind of failure, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path into the input, e.g. `"contacts.email"`.
    pub path: String,
    /// Machine-readable failure code.
    pub code: FieldCode,
    /// Human-readable message suitable for form annotation.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(path: impl Into<String>, code: FieldCode, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code,
            message: message.into(),
        }
    }

    /// Creates a missing-required-field error.
    pub fn required(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(path, FieldCode::Required, message)
    }

    /// Creates a wrong-JSON-type error.
    pub fn invalid_type(path: impl Into<String>, expected: &str) -> Self {
        let path = path.into();
        let message = format!("Expected {expected}");
        Self::new(path, FieldCode::InvalidType, message)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.path, self.message, self.code)
    }
}

/// Aggregate of every field failure found in one parse.
///
/// Guaranteed non-empty when returned from a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Wraps a list of field errors.
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Wraps a single field error.
    pub fn single(error: FieldError) -> Self {
        Self::new(vec![error])
    }

    /// All field errors, in input order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the error for a specific path, if that path failed.
    pub fn for_path(&self, path: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.path == path)
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no errors are recorded (never the case for schema output).
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for error in &self.errors {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self::single(error)
    }
}
