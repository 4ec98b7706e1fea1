//! Typed wrappers for each backend endpoint, all relative to the `/api` base.

mod auth;
mod caregiver;
mod notifications;
mod patient;

pub use auth::{LoginRequest, ProfileUpdate, ResetPasswordRequest, SignupRequest};
