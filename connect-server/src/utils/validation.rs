//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by the
//! CRUD handlers. The storage layer never validates; everything user-supplied
//! is checked here before the first write.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, category, store, username, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, messages
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, unit, tracking number, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a rough email shape: something@something, no spaces.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    let well_formed = value.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !value.contains(' ')
    });
    if !well_formed {
        return Err(AppError::validation(format!("Invalid email: {value}")));
    }
    Ok(())
}

/// Validate that a quantity is not negative.
pub fn validate_quantity(value: i64, field: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(())
}

/// Validate that an order line quantity is strictly positive.
pub fn validate_positive(value: i64, field: &str) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::validation(format!("{field} must be positive")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank_and_oversized() {
        assert!(validate_required_text("Riz brisé", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("awa@njaboot.sn").is_ok());
        assert!(validate_email("awa@njaboot").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a b@x.sn").is_err());
    }

    #[test]
    fn quantity_bounds() {
        assert!(validate_quantity(0, "quantity").is_ok());
        assert!(validate_quantity(-1, "quantity").is_err());
        assert!(validate_positive(1, "quantity").is_ok());
        assert!(validate_positive(0, "quantity").is_err());
    }
}
