//! The single error shape every API call is normalized into.

use thiserror::Error;

/// Failure below HTTP: DNS, TLS, connection reset, timeout.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// `{ message, status, data }` as shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    /// HTTP status, `None` when the request never got a response.
    pub status: Option<u16>,
    /// Response body of a failed request, when it was JSON.
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn network(err: TransportError) -> Self {
        Self::new(
            format!("Network error: {err}. Check your connection and try again."),
            None,
        )
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    pub fn is_network(&self) -> bool {
        self.status.is_none()
    }
}

impl From<store::ValidationError> for ApiError {
    fn from(err: store::ValidationError) -> Self {
        Self::new(err.message, None)
    }
}
