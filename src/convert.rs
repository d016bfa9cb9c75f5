//! Temperature conversion between Celsius and Fahrenheit.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Unknown temperature unit: {0}")]
    UnknownUnit(String),
}

/// Source unit of a temperature value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
}

impl FromStr for TempUnit {
    type Err = ConvertError;

    /// Accepts `"C"`/`"F"` and the full unit names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" | "CELSIUS" => Ok(TempUnit::Celsius),
            "F" | "FAHRENHEIT" => Ok(TempUnit::Fahrenheit),
            _ => Err(ConvertError::UnknownUnit(s.to_string())),
        }
    }
}

/// Converts a temperature to the other unit.
///
/// A `Celsius` value converts to Fahrenheit and vice versa.
pub fn convert_temperature(value: f64, unit: TempUnit) -> f64 {
    match unit {
        TempUnit::Celsius => (value * 9.0 / 5.0) + 32.0,
        TempUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}
