//! Password validator - main validation logic.

use secrecy::SecretString;
use serde::Serialize;

use crate::checks::{
    CheckName, CheckOutcome, digit_check, length_check, lowercase_check, uppercase_check,
};

/// Verdict record for a single password validation.
///
/// Immutable once produced; created fresh per call. `valid` is true
/// exactly when `failed_checks` is empty, preserving the minimal
/// boolean contract for callers that do not inspect the detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub failed_checks: Vec<CheckName>,
}

impl ValidationResult {
    /// Renders the failed checks as a single human-readable line, or
    /// `None` when the password passed every check.
    pub fn summary(&self) -> Option<String> {
        if self.failed_checks.is_empty() {
            return None;
        }
        let names: Vec<String> = self.failed_checks.iter().map(|c| c.to_string()).collect();
        Some(format!("Failed checks: {}", names.join(", ")))
    }
}

/// Validates a password and returns a detailed verdict.
///
/// Checks, each independent of the others, run in a fixed order:
/// length >= 8 characters, at least one uppercase letter, at least one
/// lowercase letter, at least one ASCII digit. The verdict is valid
/// only if all four hold.
///
/// Total over all string input; never fails or panics.
///
/// # Arguments
/// * `password` - The password to validate
///
/// # Returns
/// A `ValidationResult` with the overall verdict and the ordered list
/// of failed checks.
pub fn validate_password(password: &SecretString) -> ValidationResult {
    let mut failed_checks = Vec::new();

    // Orchestrator: execute checks in sequence
    let checks: [fn(&SecretString) -> CheckOutcome; 4] =
        [length_check, uppercase_check, lowercase_check, digit_check];

    for check_fn in checks {
        if let Some(check) = check_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%check, "password check failed");
            failed_checks.push(check);
        }
    }

    ValidationResult {
        valid: failed_checks.is_empty(),
        failed_checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_validate_valid_password() {
        let result = validate_password(&secret("Password123"));
        assert!(result.valid);
        assert!(result.failed_checks.is_empty());
        assert_eq!(result.summary(), None);
    }

    #[test]
    fn test_validate_too_short() {
        let result = validate_password(&secret("Ab1"));
        assert!(!result.valid);
        assert_eq!(result.failed_checks, vec![CheckName::Length]);
    }

    #[test]
    fn test_validate_missing_digit() {
        let result = validate_password(&secret("NoDigitHere"));
        assert!(!result.valid);
        assert_eq!(result.failed_checks, vec![CheckName::Digit]);
    }

    #[test]
    fn test_validate_missing_uppercase() {
        let result = validate_password(&secret("nouppercase123"));
        assert!(!result.valid);
        assert_eq!(result.failed_checks, vec![CheckName::Uppercase]);
    }

    #[test]
    fn test_validate_single_class_fails() {
        for pwd in ["alllowercase", "ALLUPPERCASE", "123456789"] {
            let result = validate_password(&secret(pwd));
            assert!(!result.valid, "expected '{}' to fail", pwd);
        }
    }

    #[test]
    fn test_validate_short_passwords_always_fail() {
        for pwd in ["", "a", "Ab1", "Pass12!"] {
            let result = validate_password(&secret(pwd));
            assert!(!result.valid, "expected '{}' to fail", pwd);
            assert!(result.failed_checks.contains(&CheckName::Length));
        }
    }

    #[test]
    fn test_validate_empty_password_fails_all_checks() {
        let result = validate_password(&secret(""));
        assert_eq!(
            result.failed_checks,
            vec![
                CheckName::Length,
                CheckName::Uppercase,
                CheckName::Lowercase,
                CheckName::Digit
            ]
        );
    }

    #[test]
    fn test_validate_failed_checks_keep_evaluation_order() {
        let result = validate_password(&secret("abc"));
        assert_eq!(
            result.failed_checks,
            vec![CheckName::Length, CheckName::Uppercase, CheckName::Digit]
        );
    }

    #[test]
    fn test_validate_summary_lists_failed_checks() {
        let result = validate_password(&secret("abc"));
        assert_eq!(
            result.summary(),
            Some("Failed checks: length, uppercase, digit".to_string())
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let first = validate_password(&secret("NoDigitHere"));
        let second = validate_password(&secret("NoDigitHere"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_validation_result_serializes() {
        let result = validate_password(&secret("weak"));
        let json = serde_json::to_value(&result).expect("serializable");
        assert_eq!(json["valid"], false);
        assert!(json["failed_checks"].as_array().is_some());
    }
}
