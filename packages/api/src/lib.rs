//! # API crate: the MedTrack backend client
//!
//! Everything the screens need to talk to the backend, with no UI code.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | `Transport` seam over HTTP, with the `reqwest` implementation |
//! | [`client`] | `ApiClient`: bearer token injection, envelope decoding, error normalization, 401 handling |
//! | [`error`] | `ApiError { message, status, data }` |
//! | `endpoints` | One typed method per backend endpoint (auth, caregiver, patient, notifications) |
//! | [`thunks`] | Async actions that call an endpoint and dispatch its lifecycle into `store::AppState` |
//!
//! ## Usage
//!
//! ```ignore
//! let client = ApiClient::new(ReqwestTransport::new(&config.api.base_url)?, SessionStorage::new(store));
//! thunks::login_user(&client, &mut |a| state.write().dispatch(a), email, password).await?;
//! ```

pub mod client;
mod endpoints;
pub mod error;
pub mod thunks;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::{ApiClient, Envelope};
pub use endpoints::{LoginRequest, ProfileUpdate, ResetPasswordRequest, SignupRequest};
pub use error::{ApiError, TransportError};
pub use store::disambiguation::Resolution;
pub use transport::{Method, ReqwestTransport, Transport};
