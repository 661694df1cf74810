//! Request field validation shared by the route handlers.

use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::Amount;

/// Trim an optional string field, mapping blank values to `None`.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Ensure every named field is present and not blank.
///
/// All missing fields are reported in a single error so clients can
/// highlight them together.
pub fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<(), CoreError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| non_blank(*value).is_none())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )))
    }
}

/// Validate the shape of an email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.trim().validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

/// Minimum and maximum digit count accepted for phone numbers.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=15;

/// Validate a phone number: digits with optional `+`, spaces and dashes.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    let phone = phone.trim();
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-'));
    let digits = phone.chars().filter(char::is_ascii_digit).count();

    if allowed && PHONE_DIGITS.contains(&digits) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{phone}' is not a valid phone number"
        )))
    }
}

/// Largest money amount accepted from a request.
pub const MAX_AMOUNT: Amount = 10_000_000;

/// Validate that a money amount lies in `1..=MAX_AMOUNT`.
pub fn validate_amount(field: &str, amount: Amount) -> Result<(), CoreError> {
    if amount <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be greater than zero"
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(CoreError::Validation(format!(
            "{field} must not exceed {MAX_AMOUNT}"
        )));
    }
    Ok(())
}
