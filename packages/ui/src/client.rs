//! Shared API client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] talking to the configured backend, with the
//! session persisted by [`store::FileStore`] under `<data_dir>/medtrack/`.

use api::{ApiClient, ApiError, ReqwestTransport};
use store::{AppConfig, FileStore, SessionStorage};

/// The client type the app runs with.
pub type Client = ApiClient<ReqwestTransport, FileStore>;

/// Directory holding the persisted session (and the optional `medtrack.toml`).
pub fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("medtrack")
}

/// Create the client for `config.api.base_url`.
pub fn make_client(config: &AppConfig) -> Result<Client, ApiError> {
    let transport = ReqwestTransport::new(&config.api.base_url).map_err(ApiError::network)?;
    tracing::info!("API base URL: {}", transport.base_url());
    Ok(ApiClient::new(
        transport,
        SessionStorage::new(FileStore::new(data_dir())),
    ))
}
