//! # API client wrapper
//!
//! [`ApiClient`] sits between the endpoint functions and the [`Transport`]:
//!
//! - reads the bearer token from [`SessionStorage`] and attaches it to every request;
//! - decodes the `{ data, message?, success }` [`Envelope`];
//! - normalizes every failure (network, non-2xx, `success: false`, undecodable body)
//!   into an [`ApiError`];
//! - clears the persisted session on a 401 so the next screen is the login screen.
//!
//! There is no retry and no token refresh.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{KeyValueStore, SessionStorage};

use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

/// Response envelope used by every backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl<T> Envelope<T> {
    pub fn into_data(self, status: u16) -> Result<T, ApiError> {
        self.data.ok_or_else(|| {
            ApiError::new(
                self.message
                    .unwrap_or_else(|| "The server returned no data".to_string()),
                Some(status),
            )
        })
    }
}

pub struct ApiClient<T, S: KeyValueStore> {
    transport: Arc<T>,
    session: Arc<SessionStorage<S>>,
}

impl<T, S: KeyValueStore> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            session: Arc::clone(&self.session),
        }
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, session: SessionStorage<S>) -> Self {
        Self {
            transport: Arc::new(transport),
            session: Arc::new(session),
        }
    }

    pub fn session(&self) -> &SessionStorage<S> {
        &self.session
    }

    /// Send a request and decode its envelope.
    pub(crate) async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        query: Vec<(String, String)>,
        body: Option<serde_json::Value>,
    ) -> Result<(u16, Envelope<R>), ApiError> {
        let request = HttpRequest {
            method,
            path,
            query,
            body,
            bearer: self.session.token().await,
        };
        let path = request.path.clone();

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!("{:?} {} failed: {}", method, path, e);
            ApiError::network(e)
        })?;
        let status = response.status;

        if status == 401 {
            tracing::warn!("{} returned 401, clearing session", path);
            self.session.clear().await;
        }
        if !(200..300).contains(&status) {
            return Err(error_from_response(&response));
        }

        let envelope: Envelope<R> = serde_json::from_slice(&response.body).map_err(|e| {
            tracing::error!("Undecodable response from {}: {}", path, e);
            ApiError::new("Unexpected response from server", Some(status))
        })?;
        if !envelope.success {
            return Err(ApiError::new(
                envelope
                    .message
                    .unwrap_or_else(|| "Request failed".to_string()),
                Some(status),
            ));
        }
        Ok((status, envelope))
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: String) -> Result<R, ApiError> {
        self.get_with_query(path, Vec::new()).await
    }

    pub(crate) async fn get_with_query<R: DeserializeOwned>(
        &self,
        path: String,
        query: Vec<(String, String)>,
    ) -> Result<R, ApiError> {
        let (status, envelope) = self.request(Method::Get, path, query, None).await?;
        envelope.into_data(status)
    }

    pub(crate) async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = encode(body)?;
        let (status, envelope) = self.request(method, path, Vec::new(), Some(body)).await?;
        envelope.into_data(status)
    }

    /// For endpoints whose `data` carries nothing useful. Returns the server message.
    pub(crate) async fn send_unit(
        &self,
        method: Method,
        path: String,
        body: Option<serde_json::Value>,
    ) -> Result<Option<String>, ApiError> {
        let (_, envelope) = self
            .request::<serde_json::Value>(method, path, Vec::new(), body)
            .await?;
        Ok(envelope.message)
    }
}

pub(crate) fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::new(format!("Invalid request: {e}"), None))
}

/// Percent-encode one path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn error_from_response(response: &HttpResponse) -> ApiError {
    let status = response.status;
    let fallback = format!("Request failed with status {status}");
    let Ok(body) = serde_json::from_slice::<serde_json::Value>(&response.body) else {
        return ApiError::new(fallback, Some(status));
    };
    let message = ["message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
        .unwrap_or(fallback);
    ApiError::new(message, Some(status)).with_data(body)
}
