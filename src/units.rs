use std::str::FromStr;

use crate::SummaryError;

pub const DEGREE_CELSIUS: &str = "°C";

pub const FREEZING_POINT_F: f64 = 32.0;
const CELSIUS_DEGREES: f64 = 5.0;
const FAHRENHEIT_DEGREES: f64 = 9.0;

/// Converts to Celsius and rounds to one decimal place.
pub fn fahrenheit_to_celsius(value: f64) -> f64 {
    round_to_tenth((value - FREEZING_POINT_F) * CELSIUS_DEGREES / FAHRENHEIT_DEGREES)
}

/// Rounds to one decimal place, ties to even.
///
/// The tie is decided on the exact binary value, so `0.15` (stored just
/// below the midpoint) goes down while `0.25` goes to `0.2`.
pub fn round_to_tenth(value: f64) -> f64 {
    // `{:.1}` rounds the exact binary value once, ties to even. Scaling by
    // ten first would round twice: 0.15 * 10.0 is exactly 1.5 and would
    // wrongly go up to 0.2.
    format!("{value:.1}").parse().unwrap_or(value)
}

pub fn format_celsius(value: f64) -> String {
    format!("{value:.1}{DEGREE_CELSIUS}")
}

/// A Fahrenheit reading parsed from text.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fahrenheit(pub f64);

impl Fahrenheit {
    pub fn to_celsius(self) -> f64 {
        fahrenheit_to_celsius(self.0)
    }
}

impl From<i32> for Fahrenheit {
    fn from(value: i32) -> Self {
        Self(value.into())
    }
}

impl From<Fahrenheit> for f64 {
    fn from(value: Fahrenheit) -> Self {
        value.0
    }
}

impl FromStr for Fahrenheit {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| SummaryError::InvalidNumber(s.to_string()))
    }
}
