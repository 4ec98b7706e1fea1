use crate::models::{AuthPayload, User, UserRole};
use crate::slices::ThunkEvent;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub role: Option<UserRole>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
    /// Email waiting for OTP verification (after signup or a password reset request).
    pub pending_email: Option<String>,
    /// Informational message from the last successful request, e.g. "OTP sent".
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    Login(ThunkEvent<AuthPayload>),
    /// Payload is the email the OTP was sent to.
    Signup(ThunkEvent<String>),
    VerifyOtp(ThunkEvent<AuthPayload>),
    ResendOtp(ThunkEvent<String>),
    ForgotPassword(ThunkEvent<String>),
    ResetPassword(ThunkEvent<()>),
    Logout(ThunkEvent<()>),
    /// Session read back from local storage at startup.
    RestoreSession(Option<AuthPayload>),
    FetchProfile(ThunkEvent<User>),
    UpdateProfile(ThunkEvent<User>),
    ClearError,
}

impl AuthState {
    fn authenticate(&mut self, payload: AuthPayload) {
        self.role = Some(payload.user.role);
        self.user = Some(payload.user);
        self.token = Some(payload.token);
        self.is_authenticated = true;
        self.pending_email = None;
    }

    pub fn reduce(&mut self, action: AuthAction) {
        match action {
            AuthAction::Login(event) | AuthAction::VerifyOtp(event) => {
                if let Some(payload) = event.settle(&mut self.loading, &mut self.error) {
                    self.authenticate(payload);
                }
            }
            AuthAction::Signup(event) => {
                if let Some(email) = event.settle(&mut self.loading, &mut self.error) {
                    self.pending_email = Some(email);
                    self.message = Some("Verification code sent".to_string());
                }
            }
            AuthAction::ResendOtp(event) | AuthAction::ForgotPassword(event) => {
                if let Some(email) = event.settle(&mut self.loading, &mut self.error) {
                    self.message = Some(format!("Code sent to {email}"));
                    self.pending_email = Some(email);
                }
            }
            AuthAction::ResetPassword(event) => {
                if event.settle(&mut self.loading, &mut self.error).is_some() {
                    self.pending_email = None;
                    self.message = Some("Password updated, please sign in".to_string());
                }
            }
            AuthAction::Logout(event) => {
                if event.settle(&mut self.loading, &mut self.error).is_some() {
                    *self = AuthState::default();
                }
            }
            AuthAction::RestoreSession(Some(payload)) => self.authenticate(payload),
            AuthAction::RestoreSession(None) => *self = AuthState::default(),
            AuthAction::FetchProfile(event) | AuthAction::UpdateProfile(event) => {
                if let Some(user) = event.settle(&mut self.loading, &mut self.error) {
                    self.role = Some(user.role);
                    self.user = Some(user);
                }
            }
            AuthAction::ClearError => {
                self.error = None;
                self.message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AuthPayload {
        AuthPayload {
            token: "jwt-abc".into(),
            user: User {
                id: "u1".into(),
                email: "carol@example.com".into(),
                name: "Carol Giver".into(),
                role: UserRole::Caregiver,
                is_verified: true,
                phone: None,
            },
        }
    }

    #[test]
    fn test_login_fulfilled_authenticates() {
        let mut state = AuthState::default();
        state.reduce(AuthAction::Login(ThunkEvent::Pending));
        assert!(state.loading);
        assert!(!state.is_authenticated);

        state.reduce(AuthAction::Login(ThunkEvent::Fulfilled(payload())));
        assert!(state.is_authenticated);
        assert!(!state.loading);
        assert_eq!(state.token.as_deref(), Some("jwt-abc"));
        assert_eq!(state.user, Some(payload().user));
        assert_eq!(state.role, Some(UserRole::Caregiver));
    }

    #[test]
    fn test_login_rejected_keeps_signed_out() {
        let mut state = AuthState::default();
        state.reduce(AuthAction::Login(ThunkEvent::Pending));
        state.reduce(AuthAction::Login(ThunkEvent::Rejected(
            "Invalid email or password".into(),
        )));
        assert!(!state.is_authenticated);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Invalid email or password"));

        state.reduce(AuthAction::ClearError);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_logout_fulfilled_resets_to_initial() {
        let mut state = AuthState::default();
        state.reduce(AuthAction::Login(ThunkEvent::Fulfilled(payload())));
        state.reduce(AuthAction::Logout(ThunkEvent::Pending));
        state.reduce(AuthAction::Logout(ThunkEvent::Fulfilled(())));
        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn test_signup_then_verify() {
        let mut state = AuthState::default();
        state.reduce(AuthAction::Signup(ThunkEvent::Fulfilled(
            "carol@example.com".into(),
        )));
        assert_eq!(state.pending_email.as_deref(), Some("carol@example.com"));
        assert!(!state.is_authenticated);

        state.reduce(AuthAction::VerifyOtp(ThunkEvent::Fulfilled(payload())));
        assert!(state.is_authenticated);
        assert!(state.pending_email.is_none());
    }

    #[test]
    fn test_restore_and_profile_update() {
        let mut state = AuthState::default();
        state.reduce(AuthAction::RestoreSession(Some(payload())));
        assert!(state.is_authenticated);

        let mut renamed = payload().user;
        renamed.name = "Caroline Giver".into();
        state.reduce(AuthAction::UpdateProfile(ThunkEvent::Fulfilled(renamed.clone())));
        assert_eq!(state.user, Some(renamed));
        assert_eq!(state.token.as_deref(), Some("jwt-abc"));

        state.reduce(AuthAction::RestoreSession(None));
        assert_eq!(state, AuthState::default());
    }
}
