//! Guards evaluated on forward transitions.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::error::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Parse the typed amount; it must be a positive decimal.
pub fn validate_amount(input: &str) -> Result<Decimal, ValidationError> {
    let amount = Decimal::from_str(input.trim()).map_err(|_| ValidationError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(amount.normalize())
}

/// Check donor details in order: presence first, then email shape.
///
/// Whitespace-only values count as empty.
pub fn validate_donor(name: &str, email: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Err(ValidationError::MissingDonorDetails);
    }
    if !is_valid_email(email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
