//! # Domain models mirrored from the MedTrack backend
//!
//! These are the shapes the API returns inside its `{ data, message?, success }`
//! envelope. The client never owns them: the backend is authoritative, and the
//! slices in [`crate::slices`] only cache what the last response said.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The signed-in account (caregiver or patient). Cached under the `user` session key. |
//! | [`Patient`] | A patient as seen by their caregiver, including the activity/status fields used to disambiguate notifications. |
//! | [`Medication`] | A prescribed medication instance with its printed barcode short-code. |
//! | [`Notification`] | An in-app notification. `patient_id` is sometimes missing and has to be inferred from `message`. |
//! | [`DoseConfirmation`] | The backend's answer to a scan-based dose confirmation. |
//! | [`NotificationSettings`] | Local notification toggles, persisted under the `settings` key. |
//!
//! All wire names are camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Caregiver,
    Patient,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Caregiver => "caregiver",
            UserRole::Patient => "patient",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "caregiver" => Some(UserRole::Caregiver),
            "patient" => Some(UserRole::Patient),
            _ => None,
        }
    }
}

/// The authenticated account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// First name for greetings, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or(self.email.as_str())
    }
}

/// `data` of a successful login or OTP verification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    #[default]
    Active,
    Inactive,
    Critical,
}

/// A patient under a caregiver's care.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default)]
    pub status: PatientStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
    /// Number of SOS alerts raised by this patient.
    #[serde(default)]
    pub alert_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adherence_rate: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    OnceDaily,
    TwiceDaily,
    ThriceDaily,
    AsNeeded,
    Weekly,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Frequency::OnceDaily,
        Frequency::TwiceDaily,
        Frequency::ThriceDaily,
        Frequency::AsNeeded,
        Frequency::Weekly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::OnceDaily => "Once daily",
            Frequency::TwiceDaily => "Twice daily",
            Frequency::ThriceDaily => "Three times daily",
            Frequency::AsNeeded => "As needed",
            Frequency::Weekly => "Weekly",
        }
    }
}

/// When a dose is taken relative to meals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealTiming {
    BeforeFood,
    AfterFood,
    WithFood,
    #[default]
    Any,
}

impl MealTiming {
    pub const ALL: [MealTiming; 4] = [
        MealTiming::BeforeFood,
        MealTiming::AfterFood,
        MealTiming::WithFood,
        MealTiming::Any,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealTiming::BeforeFood => "Before food",
            MealTiming::AfterFood => "After food",
            MealTiming::WithFood => "With food",
            MealTiming::Any => "Any time",
        }
    }
}

/// A medication instance. The barcode is assigned by the backend at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub unit: String,
    pub frequency: Frequency,
    #[serde(default)]
    pub timing: MealTiming,
    pub quantity: u32,
    pub remaining_quantity: u32,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub barcode: String,
    pub patient_id: String,
    #[serde(default)]
    pub caregiver_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Medication {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }

    /// Remaining stock at or below a fifth of the prescribed quantity.
    pub fn is_low_stock(&self) -> bool {
        self.quantity > 0 && u64::from(self.remaining_quantity) * 5 <= u64::from(self.quantity)
    }
}

/// Fields a caregiver fills in when adding or editing a medication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDraft {
    pub name: String,
    pub dosage: String,
    pub unit: String,
    pub frequency: Frequency,
    pub timing: MealTiming,
    pub quantity: u32,
    pub remaining_quantity: u32,
    pub expiry_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Sos,
    MedicationAdded,
    PatientAdded,
    MissedDose,
    LowStock,
    #[default]
    #[serde(other)]
    General,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(default)]
    pub r#type: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseConfirmation {
    pub medication_id: String,
    pub medication_name: String,
    pub taken_at: DateTime<Utc>,
    pub remaining_quantity: u32,
}

/// Notification toggles on the settings screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub push_enabled: bool,
    pub email_enabled: bool,
    pub medication_reminders: bool,
    pub emergency_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            push_enabled: true,
            email_enabled: true,
            medication_reminders: true,
            emergency_alerts: true,
        }
    }
}
