//! Length check - enforces the password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::{CheckName, CheckOutcome};

const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// Length is measured in characters, not bytes.
///
/// # Returns
/// - `Some(CheckName::Length)` if password is too short
/// - `None` if password has sufficient length
pub fn length_check(password: &SecretString) -> CheckOutcome {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(CheckName::Length);
    }
    None
}
