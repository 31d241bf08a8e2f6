//! Registration intake validation.
//!
//! Field rules and messages mirror the public registration form: every
//! field except special requirements is required, emails must look like
//! an address, phone numbers are exactly 10 digits, and passwords must
//! be at least [`MIN_PASSWORD_LEN`] characters and match their
//! confirmation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

/// Borrowed view of a registration submission, decoupled from the wire DTO.
#[derive(Debug)]
pub struct RegistrationForm<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub check_in_date: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub profession: &'a str,
    pub company_name: &'a str,
    pub emergency_contact: &'a str,
    pub id_proof: &'a str,
    pub room_preference: &'a str,
}

/// Reject empty/whitespace-only required fields with a per-field message.
pub fn require(value: &str, message: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(message.into()));
    }
    Ok(())
}

/// Email must match `\S+@\S+\.\S+`.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    require(email, "Email is required")?;
    if !EMAIL_RE.is_match(email) {
        return Err(CoreError::Validation("Email is invalid".into()));
    }
    Ok(())
}

/// Exactly 10 ASCII digits. `label` names the field in the messages
/// ("Phone number" or "Emergency contact").
pub fn validate_phone(value: &str, label: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{label} is required")));
    }
    if !PHONE_RE.is_match(value) {
        return Err(CoreError::Validation(format!(
            "{label} must be exactly 10 digits"
        )));
    }
    Ok(())
}

/// Password length and confirmation match.
pub fn validate_password(password: &str, confirm: &str) -> Result<(), CoreError> {
    if password.is_empty() {
        return Err(CoreError::Validation("Password is required".into()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if password != confirm {
        return Err(CoreError::Validation("Passwords do not match".into()));
    }
    Ok(())
}

/// Validate a whole registration submission, failing on the first broken
/// rule. Field order follows the original three-step form.
pub fn validate_registration(form: &RegistrationForm<'_>) -> Result<(), CoreError> {
    require(form.first_name, "First name is required")?;
    require(form.last_name, "Last name is required")?;
    validate_email(form.email)?;
    validate_phone(form.phone, "Phone number")?;
    validate_password(form.password, form.confirm_password)?;
    require(form.check_in_date, "Check-in date is required")?;

    require(form.address, "Address is required")?;
    require(form.city, "City is required")?;
    require(form.state, "State is required")?;
    require(form.profession, "Profession is required")?;
    require(form.company_name, "Company/Institution name is required")?;
    validate_phone(form.emergency_contact, "Emergency contact")?;

    require(form.id_proof, "ID proof is required")?;
    require(form.room_preference, "Room preference is required")?;
    Ok(())
}
