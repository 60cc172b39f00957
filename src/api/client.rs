//! The API client and its request pipeline.
//!
//! Every request goes through [`ApiClient::request`]: bearer injection
//! from the durable `"token"` key, the 401 recovery policy, and error
//! normalization. Endpoint groups (auth, owner restaurants, public,
//! upload) live in sibling modules as `impl` blocks on this type.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::ports::{
    HttpRequest, HttpResponse, HttpTransport, KeyValueStore, Method, MultipartFile, Navigator,
    RequestBody, LOGIN_ROUTE,
};
use crate::session::{SessionStore, TOKEN_KEY};

use super::ApiError;

/// Typed, authenticated JSON client for the backend.
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn HttpTransport>,
    storage: Arc<dyn KeyValueStore>,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Wires a client from its collaborators. The session store must
    /// share `storage`, otherwise token reads and session resets would
    /// disagree about what is persisted.
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn HttpTransport>,
        storage: Arc<dyn KeyValueStore>,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            transport,
            storage,
            session,
            navigator,
        }
    }

    /// The session store this client resets on 401.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub(super) async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::Get, path, RequestBody::Empty).await
    }

    pub(super) async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.request(Method::Post, path, RequestBody::Json(body)).await
    }

    pub(super) async fn patch_json(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.request(Method::Patch, path, RequestBody::Json(body)).await
    }

    pub(super) async fn patch_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::Patch, path, RequestBody::Empty).await
    }

    pub(super) async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::Delete, path, RequestBody::Empty).await
    }

    pub(super) async fn post_multipart(
        &self,
        path: &str,
        file: MultipartFile,
    ) -> Result<Value, ApiError> {
        self.request(Method::Post, path, RequestBody::Multipart(file))
            .await
    }

    /// The pipeline shared by every endpoint.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Value, ApiError> {
        let url = self.config.endpoint(path);
        let mut request = HttpRequest::new(method, &url);

        // Bearer injection: read the durable key at request construction
        // time, never a cached copy.
        match self.storage.get(TOKEN_KEY) {
            Ok(Some(token)) => {
                request = request.with_header("Authorization", format!("Bearer {token}"));
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(%error, "token read failed, sending unauthenticated");
            }
        }
        if matches!(body, RequestBody::Json(_)) {
            request = request.with_header("Content-Type", "application/json");
        }
        request.body = body;

        tracing::debug!(method = method.as_str(), %url, "issuing request");
        let response = self.transport.send(request).await?;

        if response.status == 401 {
            return Err(self.recover_unauthorized(&response));
        }
        if !response.is_success() {
            tracing::debug!(status = response.status, %url, "request failed");
            return Err(ApiError::from_response(&response));
        }

        parse_body(&response)
    }

    /// The global 401 policy: clear the token, reset the session, emit
    /// one `/login` signal, then surface the error to the caller.
    fn recover_unauthorized(&self, response: &HttpResponse) -> ApiError {
        tracing::warn!("received 401, clearing session");
        if let Err(error) = self.storage.remove(TOKEN_KEY) {
            tracing::warn!(%error, "failed to clear token after 401");
        }
        if let Err(error) = self.session.logout() {
            tracing::warn!(%error, "failed to reset session after 401");
        }
        self.navigator.navigate(LOGIN_ROUTE);
        ApiError::from_response(response)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn parse_body(response: &HttpResponse) -> Result<Value, ApiError> {
    if response.body.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_slice(&response.body)
        .map_err(|e| ApiError::UnexpectedShape(format!("invalid JSON body: {e}")))
}

/// Decodes a JSON envelope into its typed form.
pub(super) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::UnexpectedShape(e.to_string()))
}
