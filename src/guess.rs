//! Number-guess scoring - compares a guess against the secret.

use serde::Serialize;
use strum::Display;

/// Hint reported back to the player after a guess.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuessMessage {
    #[strum(serialize = "Too high!")]
    TooHigh,
    #[strum(serialize = "Too low!")]
    TooLow,
    #[strum(serialize = "Correct!")]
    Correct,
}

/// Verdict record for a single guess.
///
/// Created fresh per call; the module keeps no session state. The
/// caller threads `attempts_left` into the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub correct: bool,
    pub message: GuessMessage,
    pub attempts_left: u32,
    pub game_over: bool,
}

/// Scores one guess against the secret number.
///
/// A correct guess leaves `attempts_left` unchanged and reports
/// `game_over = false`; whether a correct guess ends the game is the
/// caller's decision. A wrong guess consumes one attempt, clamped at
/// zero, and the game is over exactly when no attempts remain.
///
/// # Arguments
/// * `secret` - The number to guess
/// * `guess` - The player's guess
/// * `attempts_left` - Attempts remaining before this guess
pub fn check_guess(secret: i64, guess: i64, attempts_left: u32) -> GuessOutcome {
    if guess == secret {
        #[cfg(feature = "tracing")]
        tracing::debug!(attempts_left, "guess was correct");
        return GuessOutcome {
            correct: true,
            message: GuessMessage::Correct,
            attempts_left,
            game_over: false,
        };
    }

    let message = if guess > secret {
        GuessMessage::TooHigh
    } else {
        GuessMessage::TooLow
    };

    let attempts_left = attempts_left.saturating_sub(1);
    GuessOutcome {
        correct: false,
        message,
        attempts_left,
        game_over: attempts_left == 0,
    }
}
