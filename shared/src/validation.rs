use once_cell::sync::Lazy;
use regex::Regex;
pub use validator::ValidationError;

use crate::constants::{ADMIN_PIN, MIN_NAME_LENGTH};

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s\-+()]{8,}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn validate_lead_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("name_required"));
    }
    if trimmed.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::new("name_too_short"));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("phone_required"));
    }
    if !PHONE_RE.is_match(trimmed) {
        return Err(ValidationError::new("invalid_phone_format"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("email_required"));
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Err(ValidationError::new("invalid_email_format"));
    }
    Ok(())
}

/// Plain equality against the static PIN. Gates the operator screen only;
/// not a security mechanism.
pub fn verify_admin_pin(pin: &str) -> bool {
    pin == ADMIN_PIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert!(validate_lead_name("Jo Smith").is_ok());
        assert!(validate_lead_name("  Jo  ").is_ok());
        assert_eq!(validate_lead_name("").unwrap_err().code, "name_required");
        assert_eq!(validate_lead_name("   ").unwrap_err().code, "name_required");
        assert_eq!(validate_lead_name("J").unwrap_err().code, "name_too_short");
    }

    #[test]
    fn test_phone_rules() {
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("12345678").is_ok());
        assert_eq!(validate_phone("").unwrap_err().code, "phone_required");
        assert_eq!(validate_phone("1234567").unwrap_err().code, "invalid_phone_format");
        assert_eq!(validate_phone("call me maybe").unwrap_err().code, "invalid_phone_format");
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("jo@example.com").is_ok());
        assert!(validate_email(" jo@example.com ").is_ok());
        assert_eq!(validate_email("").unwrap_err().code, "email_required");
        assert_eq!(validate_email("jo@example").unwrap_err().code, "invalid_email_format");
        assert_eq!(validate_email("jo example.com").unwrap_err().code, "invalid_email_format");
    }

    #[test]
    fn test_admin_pin_gate() {
        assert!(verify_admin_pin("1234"));
        assert!(!verify_admin_pin("0000"));
        assert!(!verify_admin_pin(""));
    }
}
