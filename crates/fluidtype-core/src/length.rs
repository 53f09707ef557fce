#![forbid(unsafe_code)]

//! Font-size lengths: a non-negative magnitude plus a [`Unit`].
//!
//! # Grammar
//!
//! A length is an unsigned decimal (`\d*\.?\d+`) optionally followed by one
//! of the supported suffixes. A bare number is read as pixels. There is no
//! sign, exponent, or surrounding whitespace; anything else is rejected so
//! callers can fall back to the author's literal value.
//!
//! # Precision
//!
//! [`Length::from_str`] keeps the parsed magnitude exactly. [`parse_length`]
//! coerces first and then rounds to three decimal places, which is the form
//! every computed CSS value is derived from.

use std::fmt;
use std::str::FromStr;

use crate::number::{format_number, round3};
use crate::unit::Unit;

/// A parsed font-size length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    /// Magnitude in `unit`.
    pub value: f64,
    /// Unit of `value`.
    pub unit: Unit,
}

/// Why a string could not be read as a [`Length`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLengthError {
    /// The input was empty.
    Empty,
    /// The numeric part does not match `\d*\.?\d+`.
    InvalidNumber(String),
    /// The suffix is not one of `px`, `rem`, `em`.
    UnsupportedUnit(String),
    /// The magnitude does not fit a finite CSS number.
    OutOfRange(String),
}

impl fmt::Display for ParseLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty length"),
            Self::InvalidNumber(raw) => write!(f, "invalid number in length {raw:?}"),
            Self::UnsupportedUnit(unit) => write!(f, "unsupported unit {unit:?}"),
            Self::OutOfRange(raw) => write!(f, "length {raw:?} is out of range"),
        }
    }
}

impl std::error::Error for ParseLengthError {}

impl Length {
    /// Create a length.
    #[inline]
    #[must_use]
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Create a pixel length.
    #[inline]
    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    /// Read a bare number as pixels.
    ///
    /// Negative and non-finite numbers are not lengths.
    #[must_use]
    pub fn from_number(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then(|| Self::px(value))
    }

    /// Express this length in `target`.
    #[must_use]
    pub fn coerce_to(self, target: Unit, root_px: f64) -> Self {
        Self::new(self.unit.convert(self.value, target, root_px), target)
    }

    /// Pixel equivalent of this length.
    #[inline]
    #[must_use]
    pub fn to_px(self, root_px: f64) -> f64 {
        self.unit.convert(self.value, Unit::Px, root_px)
    }

    /// Round the magnitude to three decimal places.
    ///
    /// Returns `None` if the magnitude is not finite.
    #[must_use]
    pub fn rounded(self) -> Option<Self> {
        round3(self.value).map(|value| Self::new(value, self.unit))
    }
}

impl FromStr for Length {
    type Err = ParseLengthError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(ParseLengthError::Empty);
        }
        let split = raw
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(raw.len());
        let (number, suffix) = raw.split_at(split);
        if !is_css_number(number) {
            return Err(ParseLengthError::InvalidNumber(raw.to_string()));
        }
        let unit = if suffix.is_empty() {
            Unit::Px
        } else {
            Unit::from_suffix(suffix)
                .ok_or_else(|| ParseLengthError::UnsupportedUnit(suffix.to_string()))?
        };
        let value = number
            .parse::<f64>()
            .map_err(|_| ParseLengthError::InvalidNumber(raw.to_string()))?;
        if !value.is_finite() {
            return Err(ParseLengthError::OutOfRange(raw.to_string()));
        }
        Ok(Self::new(value, unit))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit)
    }
}

/// Parse `raw`, optionally coerce it to `coerce_to`, and round the result.
///
/// This is the single entry point the resolver uses for every length it
/// reads: author sizes, explicit bounds, limits, and viewport widths.
pub fn parse_length(
    raw: &str,
    coerce_to: Option<Unit>,
    root_px: f64,
) -> Result<Length, ParseLengthError> {
    let length: Length = raw.parse()?;
    let length = match coerce_to {
        Some(unit) => length.coerce_to(unit, root_px),
        None => length,
    };
    length
        .rounded()
        .ok_or_else(|| ParseLengthError::OutOfRange(raw.to_string()))
}

/// `\d*\.?\d+` over ASCII digits.
fn is_css_number(s: &str) -> bool {
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => ("", s),
    };
    !frac.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::DEFAULT_ROOT_SIZE_PX as ROOT;

    fn len(raw: &str) -> Length {
        raw.parse().unwrap()
    }

    #[test]
    fn parses_supported_units() {
        assert_eq!(len("28px"), Length::new(28.0, Unit::Px));
        assert_eq!(len("1.75rem"), Length::new(1.75, Unit::Rem));
        assert_eq!(len(".5em"), Length::new(0.5, Unit::Em));
    }

    #[test]
    fn bare_numbers_are_pixels() {
        assert_eq!(len("33"), Length::px(33.0));
        assert_eq!(len("70.175"), Length::px(70.175));
        assert_eq!(Length::from_number(12.5), Some(Length::px(12.5)));
    }

    #[test]
    fn rejects_unsupported_units() {
        assert_eq!(
            "1000%".parse::<Length>(),
            Err(ParseLengthError::UnsupportedUnit("%".into()))
        );
        assert_eq!(
            "20vw".parse::<Length>(),
            Err(ParseLengthError::UnsupportedUnit("vw".into()))
        );
        assert!("12PX".parse::<Length>().is_err());
    }

    #[test]
    fn rejects_malformed_numbers() {
        for raw in ["", "px", "5.px", "1.2.3px", "-4px", "+4px", " 4px", "4px ", "1e3px"] {
            assert!(raw.parse::<Length>().is_err(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn rejects_negative_and_non_finite_numbers() {
        assert_eq!(Length::from_number(-1.0), None);
        assert_eq!(Length::from_number(f64::NAN), None);
        assert_eq!(Length::from_number(f64::INFINITY), None);
    }

    #[test]
    fn parse_length_rounds_after_coercion() {
        assert_eq!(
            parse_length("7.8125rem", None, ROOT),
            Ok(Length::new(7.813, Unit::Rem))
        );
        assert_eq!(
            parse_length("14px", Some(Unit::Rem), ROOT),
            Ok(Length::new(0.875, Unit::Rem))
        );
        assert_eq!(
            parse_length("1600px", Some(Unit::Em), ROOT),
            Ok(Length::new(100.0, Unit::Em))
        );
        assert_eq!(
            parse_length("50rem", Some(Unit::Px), ROOT),
            Ok(Length::px(800.0))
        );
    }

    #[test]
    fn rem_and_em_coerce_by_renaming() {
        assert_eq!(
            parse_length("1.119em", Some(Unit::Rem), ROOT),
            Ok(Length::new(1.119, Unit::Rem))
        );
    }

    #[test]
    fn huge_magnitudes_are_out_of_range() {
        let raw = format!("1{}px", "0".repeat(400));
        assert_eq!(
            raw.parse::<Length>(),
            Err(ParseLengthError::OutOfRange(raw.clone()))
        );
        let near_max = format!("1{}px", "0".repeat(306));
        assert_eq!(
            parse_length(&near_max, None, ROOT),
            Err(ParseLengthError::OutOfRange(near_max.clone()))
        );
    }

    #[test]
    fn display_uses_css_number_format() {
        assert_eq!(Length::px(33.0).to_string(), "33px");
        assert_eq!(Length::new(1.119, Unit::Rem).to_string(), "1.119rem");
    }

    #[test]
    fn pixel_equivalent() {
        assert_eq!(len("2rem").to_px(ROOT), 32.0);
        assert_eq!(len("2em").to_px(ROOT), 32.0);
        assert_eq!(len("2px").to_px(ROOT), 2.0);
    }
}
