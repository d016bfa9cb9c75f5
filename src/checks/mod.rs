//! Password validation checks
//!
//! Each check inspects one independent aspect of the password.

mod length;
mod variety;

pub use length::length_check;
pub use variety::{digit_check, lowercase_check, uppercase_check};

use serde::Serialize;
use strum::Display;

/// Names the independent password checks, in evaluation order.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckName {
    #[strum(serialize = "length")]
    Length,
    #[strum(serialize = "uppercase")]
    Uppercase,
    #[strum(serialize = "lowercase")]
    Lowercase,
    #[strum(serialize = "digit")]
    Digit,
}

/// Result type for check functions.
/// - `Some(check)` - Check failed
/// - `None` - Check passed
pub type CheckOutcome = Option<CheckName>;
