//! # Application state
//!
//! A normalized, in-memory cache of API responses split into slices. Nothing here
//! talks to the network: the `api` crate's thunks perform a request and dispatch
//! the lifecycle of that request as [`ThunkEvent`]s, and the reducers below merge
//! the results. Merges are last-write-wins.
//!
//! | Slice | Holds |
//! |-------|-------|
//! | [`AuthState`] | signed-in user, token, role, OTP flow state |
//! | [`CaregiverState`] | the caregiver's patients and their medications, keyed by id |
//! | [`NotificationState`] | notifications keyed by id plus display order and unread count |
//! | [`PatientState`] | a patient's own medications and last dose confirmation |
//!
//! [`Action::SessionExpired`] (a 401 anywhere) and a fulfilled logout reset every
//! slice.

mod auth;
mod caregiver;
mod notification;
mod patient;

pub use auth::{AuthAction, AuthState};
pub use caregiver::{CaregiverAction, CaregiverState};
pub use notification::{NotificationAction, NotificationState};
pub use patient::{PatientAction, PatientState};

/// Lifecycle of one async request.
#[derive(Clone, Debug, PartialEq)]
pub enum ThunkEvent<T> {
    Pending,
    Fulfilled(T),
    Rejected(String),
}

impl<T> ThunkEvent<T> {
    /// Apply the loading/error bookkeeping every slice shares and hand back the
    /// payload when the request succeeded.
    pub(crate) fn settle(self, loading: &mut bool, error: &mut Option<String>) -> Option<T> {
        match self {
            ThunkEvent::Pending => {
                *loading = true;
                *error = None;
                None
            }
            ThunkEvent::Fulfilled(payload) => {
                *loading = false;
                *error = None;
                Some(payload)
            }
            ThunkEvent::Rejected(message) => {
                *loading = false;
                *error = Some(message);
                None
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Caregiver(CaregiverAction),
    Notification(NotificationAction),
    Patient(PatientAction),
    /// The backend answered 401; the session is gone.
    SessionExpired,
}

/// Root of the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub auth: AuthState,
    pub caregiver: CaregiverState,
    pub notifications: NotificationState,
    pub patient: PatientState,
}

impl AppState {
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Auth(AuthAction::Logout(ThunkEvent::Fulfilled(()))) | Action::SessionExpired => {
                *self = AppState::default();
            }
            Action::Auth(a) => self.auth.reduce(a),
            Action::Caregiver(a) => self.caregiver.reduce(a),
            Action::Notification(a) => self.notifications.reduce(a),
            Action::Patient(a) => self.patient.reduce(a),
        }
    }
}

impl From<AuthAction> for Action {
    fn from(a: AuthAction) -> Self {
        Action::Auth(a)
    }
}

impl From<CaregiverAction> for Action {
    fn from(a: CaregiverAction) -> Self {
        Action::Caregiver(a)
    }
}

impl From<NotificationAction> for Action {
    fn from(a: NotificationAction) -> Self {
        Action::Notification(a)
    }
}

impl From<PatientAction> for Action {
    fn from(a: PatientAction) -> Self {
        Action::Patient(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthPayload, Notification, Patient, User, UserRole};

    fn signed_in() -> AppState {
        let mut state = AppState::default();
        state.dispatch(
            AuthAction::Login(ThunkEvent::Fulfilled(AuthPayload {
                token: "tok".into(),
                user: User {
                    id: "u1".into(),
                    email: "c@example.com".into(),
                    name: "Carol".into(),
                    role: UserRole::Caregiver,
                    is_verified: true,
                    phone: None,
                },
            }))
            .into(),
        );
        state.dispatch(
            CaregiverAction::FetchPatients(ThunkEvent::Fulfilled(vec![Patient {
                id: "p1".into(),
                name: "Jane Doe".into(),
                email: String::new(),
                age: None,
                status: Default::default(),
                last_activity: None,
                alert_count: 0,
                adherence_rate: None,
            }]))
            .into(),
        );
        state.dispatch(
            NotificationAction::Fetch(ThunkEvent::Fulfilled(vec![Notification {
                id: "n1".into(),
                r#type: Default::default(),
                title: "Hi".into(),
                message: "Hello".into(),
                priority: Default::default(),
                read: false,
                patient_id: None,
                created_at: None,
            }]))
            .into(),
        );
        state
    }

    #[test]
    fn test_logout_resets_every_slice() {
        let mut state = signed_in();
        assert!(state.auth.is_authenticated);
        assert_eq!(state.caregiver.patients().len(), 1);
        assert_eq!(state.notifications.unread_count, 1);

        state.dispatch(AuthAction::Logout(ThunkEvent::Pending).into());
        assert!(state.auth.loading);
        assert!(state.auth.is_authenticated);

        state.dispatch(AuthAction::Logout(ThunkEvent::Fulfilled(())).into());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_session_expired_resets_every_slice() {
        let mut state = signed_in();
        state.dispatch(Action::SessionExpired);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_settle() {
        let (mut loading, mut error) = (false, Some("old".to_string()));
        assert_eq!(ThunkEvent::<u8>::Pending.settle(&mut loading, &mut error), None);
        assert!(loading);
        assert!(error.is_none());

        assert_eq!(
            ThunkEvent::<u8>::Rejected("boom".into()).settle(&mut loading, &mut error),
            None
        );
        assert!(!loading);
        assert_eq!(error.as_deref(), Some("boom"));

        assert_eq!(ThunkEvent::Fulfilled(7u8).settle(&mut loading, &mut error), Some(7));
        assert!(error.is_none());
    }
}
