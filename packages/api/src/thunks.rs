//! # Async thunks
//!
//! Each thunk performs one request through the [`ApiClient`] and reports its
//! lifecycle to the store through a `dispatch` closure:
//!
//! 1. `Pending` before the request is sent;
//! 2. `Fulfilled(payload)` on success, or `Rejected(message)` on failure.
//!
//! A 401 additionally dispatches [`Action::SessionExpired`] before the rejection,
//! so every slice is back to its initial state when the login screen appears.
//! Client-side validation runs first and is reported as a rejection without
//! touching the network.
//!
//! Thunks also return the result so the calling screen can navigate or show an
//! alert.

use std::future::Future;

use chrono::NaiveDate;
use store::barcode::{is_valid_short_code, normalize_scanned};
use store::disambiguation::{resolve_patient, Resolution};
use store::models::{AuthPayload, DoseConfirmation, Medication, MedicationDraft, Notification};
use store::slices::{AuthAction, CaregiverAction, NotificationAction, PatientAction};
use store::{validation, Action, KeyValueStore, Patient, ThunkEvent, User, UserRole};

use crate::client::ApiClient;
use crate::endpoints::{LoginRequest, ProfileUpdate, ResetPasswordRequest, SignupRequest};
use crate::error::ApiError;
use crate::transport::Transport;

async fn run<P, F>(
    dispatch: &mut impl FnMut(Action),
    wrap: impl Fn(ThunkEvent<P>) -> Action,
    request: F,
) -> Result<P, ApiError>
where
    P: Clone,
    F: Future<Output = Result<P, ApiError>>,
{
    dispatch(wrap(ThunkEvent::Pending));
    match request.await {
        Ok(payload) => {
            dispatch(wrap(ThunkEvent::Fulfilled(payload.clone())));
            Ok(payload)
        }
        Err(err) => {
            if err.is_unauthorized() {
                dispatch(Action::SessionExpired);
            }
            tracing::warn!("Request rejected: {}", err);
            dispatch(wrap(ThunkEvent::Rejected(err.message.clone())));
            Err(err)
        }
    }
}

/// Report a failed client-side check as a rejection.
fn reject<P>(
    dispatch: &mut impl FnMut(Action),
    wrap: impl Fn(ThunkEvent<P>) -> Action,
    check: Result<(), validation::ValidationError>,
) -> Result<(), ApiError> {
    check.map_err(|err| {
        dispatch(wrap(ThunkEvent::Rejected(err.message.clone())));
        ApiError::from(err)
    })
}

fn auth<P>(variant: fn(ThunkEvent<P>) -> AuthAction) -> impl Fn(ThunkEvent<P>) -> Action {
    move |event| Action::Auth(variant(event))
}

fn caregiver<P>(
    variant: fn(ThunkEvent<P>) -> CaregiverAction,
) -> impl Fn(ThunkEvent<P>) -> Action {
    move |event| Action::Caregiver(variant(event))
}

fn notification<P>(
    variant: fn(ThunkEvent<P>) -> NotificationAction,
) -> impl Fn(ThunkEvent<P>) -> Action {
    move |event| Action::Notification(variant(event))
}

fn patient<P>(variant: fn(ThunkEvent<P>) -> PatientAction) -> impl Fn(ThunkEvent<P>) -> Action {
    move |event| Action::Patient(variant(event))
}

// ── Auth ────────────────────────────────────────────────────────────

pub async fn login_user<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    email: &str,
    password: &str,
) -> Result<AuthPayload, ApiError> {
    let wrap = auth(AuthAction::Login);
    reject(dispatch, &wrap, validation::validate_login(email, password))?;
    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    run(dispatch, wrap, async {
        let payload = client.login(&request).await?;
        client
            .session()
            .save_session(&payload.token, &payload.user)
            .await;
        tracing::info!("Signed in as {}", payload.user.email);
        Ok(payload)
    })
    .await
}

/// Returns the email the verification code was sent to.
pub async fn signup_user<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    role: UserRole,
) -> Result<String, ApiError> {
    let wrap = auth(AuthAction::Signup);
    reject(
        dispatch,
        &wrap,
        validation::validate_signup(name, email, password, confirm),
    )?;
    let request = SignupRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
        role,
    };
    run(dispatch, wrap, async {
        client.signup(&request).await?;
        Ok(request.email.clone())
    })
    .await
}

pub async fn verify_otp<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    email: &str,
    otp: &str,
) -> Result<AuthPayload, ApiError> {
    let wrap = auth(AuthAction::VerifyOtp);
    reject(dispatch, &wrap, validation::validate_otp(otp))?;
    run(dispatch, wrap, async {
        let payload = client.verify_otp(email.trim(), otp.trim()).await?;
        client
            .session()
            .save_session(&payload.token, &payload.user)
            .await;
        Ok(payload)
    })
    .await
}

pub async fn resend_otp<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    email: &str,
) -> Result<String, ApiError> {
    let email = email.trim().to_string();
    run(dispatch, auth(AuthAction::ResendOtp), async {
        client.resend_otp(&email).await?;
        Ok(email.clone())
    })
    .await
}

pub async fn forgot_password<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    email: &str,
) -> Result<String, ApiError> {
    let wrap = auth(AuthAction::ForgotPassword);
    reject(dispatch, &wrap, validation::validate_email(email))?;
    let email = email.trim().to_string();
    run(dispatch, wrap, async {
        client.forgot_password(&email).await?;
        Ok(email.clone())
    })
    .await
}

pub async fn reset_password<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    email: &str,
    otp: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ApiError> {
    let wrap = auth(AuthAction::ResetPassword);
    reject(
        dispatch,
        &wrap,
        validation::validate_reset_password(otp, password, confirm),
    )?;
    let request = ResetPasswordRequest {
        email: email.trim().to_string(),
        otp: otp.trim().to_string(),
        new_password: password.to_string(),
    };
    run(dispatch, wrap, async {
        client.reset_password(&request).await.map(|_| ())
    })
    .await
}

/// Signs out locally even when the backend call fails.
pub async fn logout_user<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
) {
    dispatch(AuthAction::Logout(ThunkEvent::Pending).into());
    if let Err(e) = client.logout().await {
        tracing::warn!("Logout request failed, clearing local session anyway: {}", e);
    }
    client.session().clear().await;
    dispatch(AuthAction::Logout(ThunkEvent::Fulfilled(())).into());
}

/// Rebuild the auth slice from the persisted session at startup.
pub async fn restore_session<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
) -> Option<AuthPayload> {
    let session = client.session();
    let payload = match (session.token().await, session.user().await) {
        (Some(token), Some(user)) => Some(AuthPayload { token, user }),
        _ => None,
    };
    tracing::debug!("Restored session: {}", payload.is_some());
    dispatch(AuthAction::RestoreSession(payload.clone()).into());
    payload
}

pub async fn fetch_profile<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
) -> Result<User, ApiError> {
    run(dispatch, auth(AuthAction::FetchProfile), async {
        let user = client.get_profile().await?;
        client.session().save_user(&user).await;
        Ok(user)
    })
    .await
}

pub async fn update_profile<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    name: &str,
    phone: &str,
) -> Result<User, ApiError> {
    let wrap = auth(AuthAction::UpdateProfile);
    let name = name.trim();
    if name.is_empty() {
        dispatch(wrap(ThunkEvent::Rejected("Name is required".into())));
        return Err(ApiError::new("Name is required", None));
    }
    let update = ProfileUpdate {
        name: name.to_string(),
        phone: Some(phone.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string),
    };
    run(dispatch, wrap, async {
        let user = client.update_profile(&update).await?;
        client.session().save_user(&user).await;
        Ok(user)
    })
    .await
}

// ── Caregiver ───────────────────────────────────────────────────────

pub async fn fetch_patients<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
) -> Result<Vec<Patient>, ApiError> {
    run(
        dispatch,
        caregiver(CaregiverAction::FetchPatients),
        client.list_patients(),
    )
    .await
}

pub async fn fetch_patient<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    patient_id: &str,
) -> Result<Patient, ApiError> {
    run(
        dispatch,
        caregiver(CaregiverAction::FetchPatient),
        client.get_patient(patient_id),
    )
    .await
}

pub async fn search_patients<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    query: &str,
) -> Result<Vec<Patient>, ApiError> {
    let wrap = caregiver(CaregiverAction::SearchPatients);
    if query.trim().is_empty() {
        dispatch(wrap(ThunkEvent::Fulfilled(Vec::new())));
        return Ok(Vec::new());
    }
    run(dispatch, wrap, client.search_patients(query)).await
}

pub async fn add_patient<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    email: &str,
) -> Result<Patient, ApiError> {
    let wrap = caregiver(CaregiverAction::AddPatient);
    reject(dispatch, &wrap, validation::validate_add_patient(email))?;
    run(dispatch, wrap, client.add_patient(email)).await
}

pub async fn remove_patient<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    patient_id: &str,
) -> Result<String, ApiError> {
    run(dispatch, caregiver(CaregiverAction::RemovePatient), async {
        client.remove_patient(patient_id).await?;
        Ok(patient_id.to_string())
    })
    .await
}

pub async fn fetch_patient_medications<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    patient_id: &str,
) -> Result<(String, Vec<Medication>), ApiError> {
    run(dispatch, caregiver(CaregiverAction::FetchMedications), async {
        let medications = client.patient_medications(patient_id).await?;
        Ok((patient_id.to_string(), medications))
    })
    .await
}

pub async fn add_medication<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    patient_id: &str,
    draft: &MedicationDraft,
    today: NaiveDate,
) -> Result<Medication, ApiError> {
    let wrap = caregiver(CaregiverAction::AddMedication);
    reject(dispatch, &wrap, validation::validate_medication(draft, today))?;
    run(dispatch, wrap, client.add_medication(patient_id, draft)).await
}

pub async fn update_medication<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    medication_id: &str,
    draft: &MedicationDraft,
    today: NaiveDate,
) -> Result<Medication, ApiError> {
    let wrap = caregiver(CaregiverAction::UpdateMedication);
    reject(dispatch, &wrap, validation::validate_medication(draft, today))?;
    run(dispatch, wrap, client.update_medication(medication_id, draft)).await
}

pub async fn delete_medication<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    medication_id: &str,
) -> Result<String, ApiError> {
    run(dispatch, caregiver(CaregiverAction::DeleteMedication), async {
        client.delete_medication(medication_id).await?;
        Ok(medication_id.to_string())
    })
    .await
}

// ── Patient ─────────────────────────────────────────────────────────

pub async fn fetch_my_medications<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
) -> Result<Vec<Medication>, ApiError> {
    run(
        dispatch,
        patient(PatientAction::FetchMedications),
        client.my_medications(),
    )
    .await
}

/// Confirm a dose from a scanned or typed short-code.
pub async fn confirm_dose<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    raw_code: &str,
) -> Result<DoseConfirmation, ApiError> {
    let wrap = patient(PatientAction::ConfirmDose);
    let code = normalize_scanned(raw_code);
    if !is_valid_short_code(&code) {
        let message = format!("\"{code}\" is not a valid MedTrack code");
        dispatch(wrap(ThunkEvent::Rejected(message.clone())));
        return Err(ApiError::new(message, None));
    }
    run(dispatch, wrap, client.confirm_dose(&code)).await
}

// ── Notifications ───────────────────────────────────────────────────

pub async fn fetch_notifications<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
) -> Result<Vec<Notification>, ApiError> {
    run(
        dispatch,
        notification(NotificationAction::Fetch),
        client.list_notifications(),
    )
    .await
}

pub async fn mark_notification_read<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    id: &str,
) -> Result<String, ApiError> {
    run(dispatch, notification(NotificationAction::MarkRead), async {
        client.mark_notification_read(id).await?;
        Ok(id.to_string())
    })
    .await
}

pub async fn mark_all_read<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
) -> Result<(), ApiError> {
    run(
        dispatch,
        notification(NotificationAction::MarkAllRead),
        client.mark_all_notifications_read(),
    )
    .await
}

pub async fn delete_notification<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    id: &str,
) -> Result<String, ApiError> {
    run(dispatch, notification(NotificationAction::Delete), async {
        client.delete_notification(id).await?;
        Ok(id.to_string())
    })
    .await
}

/// Work out which patient a notification is about, refreshing the patient list
/// first so recency and status are current.
pub async fn resolve_notification_patient<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    notification: &Notification,
) -> Result<Resolution, ApiError> {
    if let Some(id) = notification.patient_id.as_deref().filter(|id| !id.is_empty()) {
        return Ok(Resolution::Resolved(id.to_string()));
    }
    let patients = fetch_patients(client, dispatch).await?;
    let resolution = resolve_patient(notification, &patients);
    tracing::debug!("Notification {} resolved to {:?}", notification.id, resolution);
    Ok(resolution)
}

/// Mark `notification` read if needed, then resolve the patient it refers to.
///
/// A 401 while marking it read ends the flow; the store has already been reset.
/// Any other failure to mark it read is logged and resolution goes ahead.
pub async fn open_notification<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    dispatch: &mut impl FnMut(Action),
    notification: &Notification,
) -> Result<Resolution, ApiError> {
    if !notification.read {
        if let Err(e) = mark_notification_read(client, dispatch, &notification.id).await {
            if e.is_unauthorized() {
                return Err(e);
            }
            tracing::warn!("Could not mark {} read: {}", notification.id, e);
        }
    }
    resolve_notification_patient(client, dispatch, notification).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{caregiver as carol, client, FakeTransport};
    use serde_json::json;
    use store::{AppState, NotificationType};

    /// Applies every dispatched action to a fresh `AppState` and records it.
    struct Recorder {
        state: AppState,
        actions: Vec<Action>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                state: AppState::default(),
                actions: Vec::new(),
            }
        }

        fn dispatch(&mut self) -> impl FnMut(Action) + '_ {
            move |action| {
                self.actions.push(action.clone());
                self.state.dispatch(action);
            }
        }
    }

    fn patient_json(id: &str, name: &str) -> serde_json::Value {
        json!({ "id": id, "name": name, "email": format!("{id}@example.com") })
    }

    #[tokio::test]
    async fn test_login_success_saves_session_and_authenticates() {
        let fake = FakeTransport::new();
        fake.push_json(
            200,
            json!({ "success": true, "data": { "token": "jwt", "user": carol() } }),
        );
        let client = client(&fake);
        let mut rec = Recorder::new();

        login_user(&client, &mut rec.dispatch(), "carol@example.com", "password1")
            .await
            .unwrap();

        assert!(rec.state.auth.is_authenticated);
        assert_eq!(rec.state.auth.token.as_deref(), Some("jwt"));
        assert_eq!(
            rec.actions[0],
            Action::Auth(AuthAction::Login(ThunkEvent::Pending))
        );
        assert_eq!(client.session().token().await.as_deref(), Some("jwt"));
        assert_eq!(client.session().role().await, Some(UserRole::Caregiver));
    }

    #[tokio::test]
    async fn test_login_validation_never_hits_network() {
        let fake = FakeTransport::new();
        let client = client(&fake);
        let mut rec = Recorder::new();

        let err = login_user(&client, &mut rec.dispatch(), "not-an-email", "x")
            .await
            .unwrap_err();
        assert!(fake.requests().is_empty());
        assert_eq!(rec.state.auth.error.as_deref(), Some(err.message.as_str()));
        assert!(!rec.state.auth.loading);
    }

    #[tokio::test]
    async fn test_login_rejected_with_server_message() {
        let fake = FakeTransport::new();
        fake.push_json(400, json!({ "success": false, "message": "Invalid credentials" }));
        let client = client(&fake);
        let mut rec = Recorder::new();

        let err = login_user(&client, &mut rec.dispatch(), "carol@example.com", "password1")
            .await
            .unwrap_err();
        assert_eq!(err.status, Some(400));
        assert_eq!(rec.state.auth.error.as_deref(), Some("Invalid credentials"));
        assert!(!rec.state.auth.is_authenticated);
    }

    #[tokio::test]
    async fn test_unauthorized_expires_session_everywhere() {
        let fake = FakeTransport::new();
        fake.push_json(200, json!({ "success": true, "data": [patient_json("p1", "Jane Doe")] }));
        fake.push_json(401, json!({ "message": "jwt expired" }));
        let client = client(&fake);
        client.session().save_session("old", &carol()).await;
        let mut rec = Recorder::new();
        restore_session(&client, &mut rec.dispatch()).await;
        fetch_patients(&client, &mut rec.dispatch()).await.unwrap();
        assert_eq!(rec.state.caregiver.patients().len(), 1);

        let err = fetch_notifications(&client, &mut rec.dispatch())
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert!(rec.actions.contains(&Action::SessionExpired));
        assert!(!rec.state.auth.is_authenticated);
        assert!(rec.state.caregiver.patients().is_empty());
        assert_eq!(rec.state.notifications.error.as_deref(), Some("jwt expired"));
        assert!(client.session().token().await.is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_request_fails() {
        let fake = FakeTransport::new();
        fake.push_failure("offline");
        let client = client(&fake);
        client.session().save_session("tok", &carol()).await;
        let mut rec = Recorder::new();
        restore_session(&client, &mut rec.dispatch()).await;
        assert!(rec.state.auth.is_authenticated);

        logout_user(&client, &mut rec.dispatch()).await;
        assert_eq!(rec.state, AppState::default());
        assert!(client.session().token().await.is_none());
    }

    #[tokio::test]
    async fn test_signup_records_pending_email() {
        let fake = FakeTransport::new();
        fake.push_json(201, json!({ "success": true, "message": "OTP sent" }));
        let client = client(&fake);
        let mut rec = Recorder::new();

        let email = signup_user(
            &client,
            &mut rec.dispatch(),
            "Pat Smith",
            " pat@example.com ",
            "password1",
            "password1",
            UserRole::Patient,
        )
        .await
        .unwrap();
        assert_eq!(email, "pat@example.com");
        assert_eq!(rec.state.auth.pending_email.as_deref(), Some("pat@example.com"));
    }

    #[tokio::test]
    async fn test_confirm_dose_normalizes_and_validates() {
        let fake = FakeTransport::new();
        fake.push_json(
            200,
            json!({
                "success": true,
                "data": {
                    "medicationId": "m1",
                    "medicationName": "Aspirin",
                    "takenAt": "2026-10-19T08:00:00Z",
                    "remainingQuantity": 29
                }
            }),
        );
        let client = client(&fake);
        let mut rec = Recorder::new();

        let err = confirm_dose(&client, &mut rec.dispatch(), "MT123").await.unwrap_err();
        assert!(err.message.contains("MT123"));
        assert!(fake.requests().is_empty());

        let confirmation = confirm_dose(&client, &mut rec.dispatch(), " mtab12cd34 ")
            .await
            .unwrap();
        assert_eq!(confirmation.remaining_quantity, 29);
        assert_eq!(
            fake.requests()[0].body,
            Some(json!({ "barcode": "MTAB12CD34" }))
        );
        assert!(rec.state.patient.error.is_none());
        assert_eq!(rec.state.patient.last_confirmation, Some(confirmation));
    }

    #[tokio::test]
    async fn test_remove_patient_updates_state() {
        let fake = FakeTransport::new();
        fake.push_json(
            200,
            json!({ "success": true, "data": [patient_json("p1", "Jane Doe"), patient_json("p2", "Bob Lee")] }),
        );
        fake.push_json(200, json!({ "success": true, "message": "Removed" }));
        let client = client(&fake);
        let mut rec = Recorder::new();

        fetch_patients(&client, &mut rec.dispatch()).await.unwrap();
        remove_patient(&client, &mut rec.dispatch(), "p1").await.unwrap();

        let ids: Vec<_> = rec.state.caregiver.patients().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, ["p2"]);
    }

    #[tokio::test]
    async fn test_notification_flow() {
        let fake = FakeTransport::new();
        fake.push_json(
            200,
            json!({
                "success": true,
                "data": [
                    { "id": "n1", "type": "sos", "title": "SOS", "message": "Emergency alert from Jane Doe", "read": false },
                    { "id": "n2", "title": "Hello", "message": "Welcome", "read": false }
                ]
            }),
        );
        fake.push_json(200, json!({ "success": true }));
        fake.push_json(200, json!({ "success": true }));
        let client = client(&fake);
        let mut rec = Recorder::new();

        fetch_notifications(&client, &mut rec.dispatch()).await.unwrap();
        assert_eq!(rec.state.notifications.unread_count, 2);
        mark_notification_read(&client, &mut rec.dispatch(), "n1").await.unwrap();
        assert_eq!(rec.state.notifications.unread_count, 1);
        mark_all_read(&client, &mut rec.dispatch()).await.unwrap();
        assert_eq!(rec.state.notifications.unread_count, 0);
        assert_eq!(fake.requests()[2].path, "/notifications/read-all");
    }

    fn unread_sos() -> Notification {
        Notification {
            id: "n1".into(),
            r#type: NotificationType::Sos,
            title: "SOS".into(),
            message: "Emergency alert from Jane Doe. Immediate assistance required.".into(),
            priority: Default::default(),
            read: false,
            patient_id: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_open_notification_stops_after_unauthorized_mark_read() {
        let fake = FakeTransport::new();
        fake.push_json(401, json!({ "message": "jwt expired" }));
        let client = client(&fake);
        client.session().save_session("stale", &carol()).await;
        let mut rec = Recorder::new();
        restore_session(&client, &mut rec.dispatch()).await;

        let err = open_notification(&client, &mut rec.dispatch(), &unread_sos())
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(fake.requests().len(), 1);
        assert!(!rec.state.auth.is_authenticated);
        assert!(rec.state.caregiver.patients().is_empty());
        assert!(client.session().token().await.is_none());
    }

    #[tokio::test]
    async fn test_open_notification_resolves_despite_mark_read_failure() {
        let fake = FakeTransport::new();
        fake.push_json(500, json!({ "message": "boom" }));
        fake.push_json(
            200,
            json!({ "success": true, "data": [patient_json("p7", "Jane Doe")] }),
        );
        let client = client(&fake);
        let mut rec = Recorder::new();

        let resolution = open_notification(&client, &mut rec.dispatch(), &unread_sos())
            .await
            .unwrap();
        assert_eq!(resolution, Resolution::Resolved("p7".into()));
        assert_eq!(fake.requests()[1].path, "/caregiver/patients");
    }

    #[tokio::test]
    async fn test_resolve_notification_patient() {
        let fake = FakeTransport::new();
        fake.push_json(
            200,
            json!({ "success": true, "data": [patient_json("p1", "Jane Doe"), patient_json("p2", "Bob Lee")] }),
        );
        let client = client(&fake);
        let mut rec = Recorder::new();
        let sos: Notification = serde_json::from_value(json!({
            "id": "n1",
            "type": "sos",
            "title": "SOS",
            "message": "Emergency alert from Bob Lee. Immediate assistance required."
        }))
        .unwrap();

        let resolution = resolve_notification_patient(&client, &mut rec.dispatch(), &sos)
            .await
            .unwrap();
        assert_eq!(resolution, Resolution::Resolved("p2".into()));

        // An explicit id short-circuits without a request
        let mut explicit = sos.clone();
        explicit.patient_id = Some("p9".into());
        let resolution = resolve_notification_patient(&client, &mut rec.dispatch(), &explicit)
            .await
            .unwrap();
        assert_eq!(resolution, Resolution::Resolved("p9".into()));
        assert_eq!(fake.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_add_medication_validates_before_sending() {
        let fake = FakeTransport::new();
        let client = client(&fake);
        let mut rec = Recorder::new();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let draft = MedicationDraft {
            name: String::new(),
            dosage: "10".into(),
            unit: "mg".into(),
            frequency: store::models::Frequency::OnceDaily,
            timing: Default::default(),
            quantity: 30,
            remaining_quantity: 30,
            expiry_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            instructions: None,
        };

        assert!(add_medication(&client, &mut rec.dispatch(), "p1", &draft, today)
            .await
            .is_err());
        assert!(fake.requests().is_empty());
        assert!(rec.state.caregiver.error.is_some());
    }
}
