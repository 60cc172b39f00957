//! Authentication endpoints.
//!
//! On success both operations transition the session store to
//! `Authenticated`, which also persists the `"token"` key every later
//! request reads.

use serde::Deserialize;

use crate::domain::User;
use crate::validation::{LoginInput, RegisterInput};

use super::client::decode;
use super::{ApiClient, ApiError};

/// Token-and-user pair returned by both auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl ApiClient {
    /// `POST /auth/register`. Creates an account and signs it in.
    pub async fn register(&self, input: &RegisterInput) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(input)
            .map_err(|e| ApiError::UnexpectedShape(e.to_string()))?;
        let response: AuthResponse = decode(self.post_json("/auth/register", body).await?)?;
        self.session()
            .set_authenticated(response.user.clone(), response.token.clone())?;
        Ok(response)
    }

    /// `POST /auth/login`.
    pub async fn login(&self, input: &LoginInput) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(input)
            .map_err(|e| ApiError::UnexpectedShape(e.to_string()))?;
        let response: AuthResponse = decode(self.post_json("/auth/login", body).await?)?;
        self.session()
            .set_authenticated(response.user.clone(), response.token.clone())?;
        Ok(response)
    }
}
