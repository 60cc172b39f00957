//! Authentication input schemas.

use serde::Serialize;
use serde_json::Value;

use crate::domain::{FieldCode, FieldError, ValidationErrors};

use super::{is_valid_email, Schema};

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginInput {
    pub email: String,
    /// Exactly six characters, kept as a string.
    pub password: String,
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterInput {
    pub email: String,
    pub username: String,
    pub password: String,
}

fn parse_email(input: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
    let Some(email) = input.get("email").and_then(Value::as_str) else {
        errors.push(FieldError::required("email", "Email is required"));
        return None;
    };
    if !is_valid_email(email) {
        errors.push(FieldError::new(
            "email",
            FieldCode::InvalidEmail,
            "Invalid email address",
        ));
        return None;
    }
    Some(email.to_string())
}

fn parse_password(input: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
    let Some(password) = input.get("password").and_then(Value::as_str) else {
        errors.push(FieldError::required("password", "Password is required"));
        return None;
    };
    if password.chars().count() != 6 {
        errors.push(FieldError::new(
            "password",
            FieldCode::InvalidFormat,
            "Password must be exactly 6 digits",
        ));
        return None;
    }
    Some(password.to_string())
}

fn parse_username(input: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
    let Some(username) = input.get("username").and_then(Value::as_str) else {
        errors.push(FieldError::required("username", "Username is required"));
        return None;
    };
    if username.chars().count() < 3 {
        errors.push(FieldError::new(
            "username",
            FieldCode::TooShort,
            "Username must be at least 3 characters",
        ));
        return None;
    }
    Some(username.to_string())
}

impl Schema for LoginInput {
    fn parse(input: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = Vec::new();
        let email = parse_email(input, &mut errors);
        let password = parse_password(input, &mut errors);
        match (email, password) {
            (Some(email), Some(password)) => Ok(Self { email, password }),
            _ => Err(ValidationErrors::new(errors)),
        }
    }
}

impl Schema for RegisterInput {
    fn parse(input: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = Vec::new();
        let email = parse_email(input, &mut errors);
        let username = parse_username(input, &mut errors);
        let password = parse_password(input, &mut errors);
        match (email, username, password) {
            (Some(email), Some(username), Some(password)) => Ok(Self {
                email,
                username,
                password,
            }),
            _ => Err(ValidationErrors::new(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_accepts_valid_credentials() {
        let input = json!({"email": "a@b.co", "password": "123456"});
        let login = LoginInput::parse(&input).unwrap();
        assert_eq!(login.email, "a@b.co");
        assert_eq!(login.password, "123456");
    }

    #[test]
    fn login_rejects_short_password() {
        let input = json!({"email": "a@b.co", "password": "12345"});
        let errors = LoginInput::parse(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.for_path("password").unwrap().code, FieldCode::InvalidFormat);
    }

    #[test]
    fn login_rejects_seven_char_password() {
        let input = json!({"email": "a@b.co", "password": "1234567"});
        assert!(LoginInput::safe_parse(&input).is_err());
    }

    #[test]
    fn login_reports_every_invalid_field() {
        let input = json!({"email": "nope", "password": "1"});
        let errors = LoginInput::parse(&input).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.for_path("email").is_some());
        assert!(errors.for_path("password").is_some());
    }

    #[test]
    fn register_requires_username_of_three_chars() {
        let input = json!({"email": "a@b.co", "username": "al", "password": "123456"});
        let errors = RegisterInput::parse(&input).unwrap_err();
        assert_eq!(errors.for_path("username").unwrap().code, FieldCode::TooShort);

        let input = json!({"email": "a@b.co", "username": "ali", "password": "123456"});
        assert!(RegisterInput::safe_parse(&input).is_ok());
    }

    #[test]
    fn register_rejects_missing_fields_with_required_codes() {
        let errors = RegisterInput::parse(&json!({})).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .errors()
            .iter()
            .all(|e| e.code == FieldCode::Required));
    }
}
