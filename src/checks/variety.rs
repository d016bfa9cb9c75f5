//! Character variety checks - uppercase, lowercase and digit presence.

use secrecy::{ExposeSecret, SecretString};

use super::{CheckName, CheckOutcome};

/// Checks if the password contains at least one uppercase letter.
///
/// # Returns
/// - `Some(CheckName::Uppercase)` if no uppercase letter is present
/// - `None` otherwise
pub fn uppercase_check(password: &SecretString) -> CheckOutcome {
    if !password.expose_secret().chars().any(|c| c.is_uppercase()) {
        return Some(CheckName::Uppercase);
    }
    None
}

/// Checks if the password contains at least one lowercase letter.
///
/// # Returns
/// - `Some(CheckName::Lowercase)` if no lowercase letter is present
/// - `None` otherwise
pub fn lowercase_check(password: &SecretString) -> CheckOutcome {
    if !password.expose_secret().chars().any(|c| c.is_lowercase()) {
        return Some(CheckName::Lowercase);
    }
    None
}

/// Checks if the password contains at least one ASCII digit.
///
/// # Returns
/// - `Some(CheckName::Digit)` if no digit is present
/// - `None` otherwise
pub fn digit_check(password: &SecretString) -> CheckOutcome {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some(CheckName::Digit);
    }
    None
}
