//! Track lengths with units
//!
//! A [`GridLength`] is the size of one physical column or row as handed to the
//! underlying grid. The string form follows the usual grid conventions:
//! `"Auto"`, `"*"`, `"2.5*"` and plain numbers (optionally suffixed with `px`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Size of a physical track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridLength {
    /// Sized to content.
    Auto,
    /// Fixed size in device independent pixels.
    Fixed(f32),
    /// Proportional share of the remaining space.
    Star(f32),
}

impl GridLength {
    /// A single star (`*`), the default size of a track.
    pub const STAR: GridLength = GridLength::Star(1.0);

    pub fn is_auto(&self) -> bool {
        matches!(self, GridLength::Auto)
    }

    pub fn is_star(&self) -> bool {
        matches!(self, GridLength::Star(_))
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, GridLength::Fixed(_))
    }

    /// The numeric part of the length; `Auto` reports 1.0.
    pub fn value(&self) -> f32 {
        match *self {
            GridLength::Auto => 1.0,
            GridLength::Fixed(value) | GridLength::Star(value) => value,
        }
    }
}

impl Default for GridLength {
    fn default() -> Self {
        GridLength::STAR
    }
}

impl From<f32> for GridLength {
    fn from(pixels: f32) -> Self {
        GridLength::Fixed(pixels)
    }
}

impl fmt::Display for GridLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GridLength::Auto => f.write_str("Auto"),
            GridLength::Star(factor) if factor == 1.0 => f.write_str("*"),
            GridLength::Star(factor) => write!(f, "{factor}*"),
            GridLength::Fixed(pixels) => write!(f, "{pixels}"),
        }
    }
}

/// Errors produced when parsing a [`GridLength`] from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridLengthParseError {
    #[error("Grid length is empty")]
    Empty,

    #[error("Invalid grid length {input:?}: {reason}")]
    InvalidNumber { input: String, reason: String },

    #[error("Grid length {input:?} must be a finite, non-negative value")]
    OutOfRange { input: String },
}

impl FromStr for GridLength {
    type Err = GridLengthParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(GridLengthParseError::Empty);
        }

        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(GridLength::Auto);
        }

        if let Some(factor) = trimmed.strip_suffix('*') {
            let factor = factor.trim();
            if factor.is_empty() {
                return Ok(GridLength::STAR);
            }
            return parse_value(factor, input).map(GridLength::Star);
        }

        let pixels = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
        parse_value(pixels, input).map(GridLength::Fixed)
    }
}

fn parse_value(number: &str, input: &str) -> Result<f32, GridLengthParseError> {
    let value: f32 = number
        .parse()
        .map_err(|err: std::num::ParseFloatError| GridLengthParseError::InvalidNumber {
            input: input.to_string(),
            reason: err.to_string(),
        })?;

    if !value.is_finite() || value < 0.0 {
        return Err(GridLengthParseError::OutOfRange {
            input: input.to_string(),
        });
    }

    Ok(value)
}
