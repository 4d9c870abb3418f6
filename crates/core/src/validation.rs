//! Input validation for values arriving from the presentation layer.
//!
//! The desktop UI hands over raw text fields, so everything here takes
//! strings and either normalizes them into typed values or returns a
//! [`CoreError::Validation`] with a human-readable reason. Validation
//! failures never panic; they abort the requested operation before any
//! statement executes.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CoreError;
use crate::types::DbId;

/// Minimal `local@domain.tld` shape. Deliberately loose: the goal is to
/// catch obvious typos, not to implement RFC 5322.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// Digits plus the usual separator characters, 3 to 20 chars total.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d+\-\s()]{3,20}$").expect("valid regex"));

/// Trim a raw text field, mapping empty input to `None`.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Check an email address for the minimal `local@domain.tld` shape.
///
/// Absent email is allowed (the column is nullable and unique only among
/// non-null values); callers filter `None` before reaching this.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(CoreError::validation(format!("Invalid email format: {email}")))
    }
}

/// Check a phone number: digits, `+`, `-`, spaces, parentheses, length 3-20.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(CoreError::validation(format!("Invalid phone number: {phone}")))
    }
}

/// Coerce a salary field to a non-negative decimal with 2 fractional digits.
///
/// Empty input means "no salary entered" and coerces to 0.00, matching the
/// employee table's column default. Non-numeric or negative input is a
/// validation failure.
pub fn parse_salary(raw: &str) -> Result<Decimal, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::new(0, 2));
    }
    let value: Decimal = trimmed
        .parse()
        .map_err(|_| CoreError::validation(format!("Invalid salary value: {raw}")))?;
    if value.is_sign_negative() {
        return Err(CoreError::validation("Salary must not be negative"));
    }
    Ok(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Coerce an identifier field to a positive id.
pub fn parse_id(raw: &str, what: &str) -> Result<DbId, CoreError> {
    let id: DbId = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::validation(format!("{what} must be a number")))?;
    if id <= 0 {
        return Err(CoreError::validation(format!("{what} must be positive")));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::error::CoreError;

    // -----------------------------------------------------------------------
    // Email
    // -----------------------------------------------------------------------

    #[test]
    fn accepts_plain_email() {
        assert!(validate_email("jane.doe@example.com").is_ok());
    }

    #[test]
    fn rejects_email_without_domain_dot() {
        assert_matches!(validate_email("jane@example"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_email_without_at() {
        assert_matches!(validate_email("jane.example.com"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_email_with_spaces() {
        assert_matches!(validate_email("jane doe@example.com"), Err(CoreError::Validation(_)));
    }

    // -----------------------------------------------------------------------
    // Phone
    // -----------------------------------------------------------------------

    #[test]
    fn accepts_international_phone() {
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
    }

    #[test]
    fn rejects_phone_with_letters() {
        assert_matches!(validate_phone("555-CALL"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_too_short_phone() {
        assert_matches!(validate_phone("12"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_too_long_phone() {
        assert_matches!(
            validate_phone("123456789012345678901"),
            Err(CoreError::Validation(_))
        );
    }

    // -----------------------------------------------------------------------
    // Salary
    // -----------------------------------------------------------------------

    #[test]
    fn empty_salary_defaults_to_zero() {
        assert_eq!(parse_salary("").unwrap(), dec!(0.00));
    }

    #[test]
    fn salary_is_rounded_to_two_decimals() {
        assert_eq!(parse_salary("1234.567").unwrap(), dec!(1234.57));
    }

    #[test]
    fn rejects_negative_salary() {
        assert_matches!(parse_salary("-1"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_non_numeric_salary() {
        assert_matches!(parse_salary("lots"), Err(CoreError::Validation(_)));
    }

    // -----------------------------------------------------------------------
    // Identifiers
    // -----------------------------------------------------------------------

    #[test]
    fn parses_positive_id() {
        assert_eq!(parse_id(" 42 ", "Employee ID").unwrap(), 42);
    }

    #[test]
    fn rejects_zero_id() {
        assert_matches!(parse_id("0", "Employee ID"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert_matches!(parse_id("abc", "Employee ID"), Err(CoreError::Validation(_)));
    }

    // -----------------------------------------------------------------------
    // Optional fields
    // -----------------------------------------------------------------------

    #[test]
    fn optional_maps_blank_to_none() {
        assert_eq!(optional("   "), None);
        assert_eq!(optional("Engineer"), Some("Engineer".to_string()));
    }
}
