#![forbid(unsafe_code)]

//! The closed set of font-size units the engine can scale.

use std::fmt;

/// Root font size in pixels used for `rem`/`em` conversions.
pub const DEFAULT_ROOT_SIZE_PX: f64 = 16.0;

/// A supported absolute or root-relative font-size unit.
///
/// `em` is treated as root-relative here: the engine has no parent element
/// to resolve against, so `1em` and `1rem` both equal the root size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// CSS pixels.
    Px,
    /// Root em.
    Rem,
    /// Em, resolved against the root size.
    Em,
}

impl Unit {
    /// All supported units.
    pub const ALL: [Unit; 3] = [Unit::Px, Unit::Rem, Unit::Em];

    /// The CSS suffix for this unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
            Self::Em => "em",
        }
    }

    /// Look up a unit by its exact CSS suffix.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == suffix)
    }

    /// Whether the unit is relative to the root font size.
    #[inline]
    #[must_use]
    pub const fn is_relative(self) -> bool {
        matches!(self, Self::Rem | Self::Em)
    }

    /// Convert `value` expressed in `self` into `target`.
    ///
    /// `rem` and `em` convert into each other one-to-one.
    #[must_use]
    pub fn convert(self, value: f64, target: Unit, root_px: f64) -> f64 {
        match (self.is_relative(), target.is_relative()) {
            (true, false) => value * root_px,
            (false, true) => value / root_px,
            _ => value,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
