//! Client-side form validation.
//!
//! Runs before any request is sent; failures are shown through the same alert dialog
//! as API errors.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::MedicationDraft;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const OTP_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

type Result<T = ()> = std::result::Result<T, ValidationError>;

fn required(field: &'static str, label: &str, value: &str) -> Result {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{label} is required")));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result {
    required("email", "Email", email)?;
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(ValidationError::new("email", "Enter a valid email address"));
    }
    Ok(())
}

fn validate_new_password(field: &'static str, password: &str, confirm: &str) -> Result {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(
            field,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    if password != confirm {
        return Err(ValidationError::new("confirmPassword", "Passwords do not match"));
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> Result {
    validate_email(email)?;
    required("password", "Password", password)
}

pub fn validate_signup(name: &str, email: &str, password: &str, confirm: &str) -> Result {
    required("name", "Name", name)?;
    validate_email(email)?;
    validate_new_password("password", password, confirm)
}

/// OTPs are exactly six digits.
pub fn validate_otp(otp: &str) -> Result {
    let otp = otp.trim();
    if otp.len() != OTP_LEN || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            "otp",
            format!("Enter the {OTP_LEN}-digit code from your email"),
        ));
    }
    Ok(())
}

pub fn validate_reset_password(otp: &str, password: &str, confirm: &str) -> Result {
    validate_otp(otp)?;
    validate_new_password("newPassword", password, confirm)
}

pub fn validate_add_patient(email: &str) -> Result {
    validate_email(email)
}

pub fn validate_medication(draft: &MedicationDraft, today: NaiveDate) -> Result {
    required("name", "Medication name", &draft.name)?;
    required("dosage", "Dosage", &draft.dosage)?;
    required("unit", "Unit", &draft.unit)?;
    if draft.quantity == 0 {
        return Err(ValidationError::new("quantity", "Quantity must be greater than 0"));
    }
    if draft.remaining_quantity > draft.quantity {
        return Err(ValidationError::new(
            "remainingQuantity",
            "Remaining quantity cannot exceed quantity",
        ));
    }
    if draft.expiry_date < today {
        return Err(ValidationError::new("expiryDate", "Expiry date is in the past"));
    }
    Ok(())
}
