//! Practice-exercise evaluation library
//!
//! This library provides a small set of stateless, pure evaluation
//! functions for introductory programming exercises: password
//! validation, number-guess scoring, and text analysis. Each function
//! inspects its input against a fixed rule set and returns a
//! structured, immutable verdict record for the caller to render.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use drill_eval::{analyze_text, check_guess, validate_password, GuessMessage};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Password123".to_string().into());
//! let verdict = validate_password(&password);
//! assert!(verdict.valid);
//!
//! let outcome = check_guess(42, 50, 5);
//! assert_eq!(outcome.message, GuessMessage::TooHigh);
//! assert_eq!(outcome.attempts_left, 4);
//!
//! let stats = analyze_text("Hello world!");
//! assert_eq!(stats.word_count, 2);
//! ```

// Internal modules
mod checks;
mod convert;
mod counter;
mod guess;
mod password;
mod profile;
mod score;
mod text;
mod timing;

// Public API
pub use checks::CheckName;
pub use convert::{ConvertError, TempUnit, convert_temperature};
pub use counter::Counter;
pub use guess::{GuessMessage, GuessOutcome, check_guess};
pub use password::{ValidationResult, validate_password};
pub use profile::Profile;
pub use score::{CartOptions, Grade, average, cart_total, count_vowels, letter_grade};
pub use text::{TextStats, analyze_text};
pub use timing::{Timed, Timing, timed};
