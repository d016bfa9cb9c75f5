//! Grading and scoring utilities.

use std::collections::BTreeMap;

use serde::Serialize;
use strum::Display;

/// Letter grade for a 0-100 score.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

/// Maps a 0-100 score to its letter grade.
pub fn letter_grade(score: u8) -> Grade {
    if score >= 90 {
        Grade::A
    } else if score >= 80 {
        Grade::B
    } else if score >= 70 {
        Grade::C
    } else if score >= 60 {
        Grade::D
    } else {
        Grade::F
    }
}

/// Averages an arbitrary-length sequence of values.
///
/// Returns 0.0 for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Counts ASCII vowels in a string, either case.
pub fn count_vowels(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

/// Pricing options for [`cart_total`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartOptions {
    /// Tax rate as a fraction (0.08 = 8%).
    pub tax_rate: f64,
    /// Discount as a percentage (10.0 = 10%).
    pub discount_pct: f64,
}

impl Default for CartOptions {
    fn default() -> Self {
        Self {
            tax_rate: 0.08,
            discount_pct: 0.0,
        }
    }
}

/// Totals a cart of priced items.
///
/// The discount applies to the subtotal first; tax applies to the
/// discounted amount.
pub fn cart_total(prices: &BTreeMap<String, f64>, options: &CartOptions) -> f64 {
    let subtotal: f64 = prices.values().sum();
    let discounted = subtotal - subtotal * (options.discount_pct / 100.0);
    discounted + discounted * options.tax_rate
}
