#![forbid(unsafe_code)]

//! Font-size presets as supplied by a theme configuration.
//!
//! A preset carries a base size and an optional per-preset fluid override.
//! Theme JSON is loose about shapes (`fluid` may be `false`, `null`, `[]`,
//! or an object), so [`FontSizePreset::from_json`] folds every shape it does
//! not recognize into [`PresetFluid::Inherit`].

use std::fmt;

use fluidtype_core::{Length, ParseLengthError, format_number};
use serde::Serialize;
use serde_json::Value;

/// A font-size value as authored: a bare number or a CSS string.
///
/// Resolution hands back the same type, so a value the engine leaves alone
/// round-trips without being reformatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SizeValue {
    /// A unitless number, read as pixels.
    Number(f64),
    /// Any CSS string (`"1.75rem"`, `"1000%"`, `"clamp(...)"`).
    Text(String),
}

impl SizeValue {
    /// Whether there is nothing to scale: zero, `"0"`, an empty string, or NaN.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0.0 || n.is_nan(),
            Self::Text(s) => s.is_empty() || s == "0",
        }
    }

    /// Whether the value is already a `clamp()` expression.
    #[must_use]
    pub fn is_fluid(&self) -> bool {
        matches!(self, Self::Text(s) if s.contains("clamp("))
    }

    /// Read the value as a length without rounding.
    pub fn to_length(&self) -> Result<Length, ParseLengthError> {
        match self {
            Self::Number(n) => {
                Length::from_number(*n).ok_or_else(|| ParseLengthError::InvalidNumber(n.to_string()))
            }
            Self::Text(s) => s.parse(),
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for SizeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for SizeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SizeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Explicit fluid bounds for a single preset. Literals are kept verbatim
/// and emitted as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FluidBounds {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl FluidBounds {
    /// Set the minimum literal.
    #[must_use]
    pub fn min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Set the maximum literal.
    #[must_use]
    pub fn max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Neither bound is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Per-preset fluid override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PresetFluid {
    /// Defer to the global settings.
    #[default]
    Inherit,
    /// Never scale this preset.
    Disabled,
    /// Scale this preset with computed bounds.
    Enabled,
    /// Scale this preset between explicit bounds.
    Bounds(FluidBounds),
}

impl PresetFluid {
    /// Whether the preset turns fluid scaling on by itself.
    ///
    /// A bounds object with no bounds does not.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::Enabled => true,
            Self::Bounds(bounds) => !bounds.is_empty(),
            Self::Inherit | Self::Disabled => false,
        }
    }

    /// Explicit bounds, if any were given.
    #[must_use]
    pub fn bounds(&self) -> Option<&FluidBounds> {
        match self {
            Self::Bounds(bounds) => Some(bounds),
            _ => None,
        }
    }

    fn from_json(value: &Value) -> Self {
        match value {
            Value::Bool(false) => Self::Disabled,
            Value::Bool(true) => Self::Enabled,
            Value::Object(map) => Self::Bounds(FluidBounds {
                min: map.get("min").and_then(length_literal),
                max: map.get("max").and_then(length_literal),
            }),
            _ => Self::Inherit,
        }
    }
}

/// A named font size entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontSizePreset {
    /// The nominal size. `None` when the theme left it out or set `null`.
    pub size: Option<SizeValue>,
    /// Per-preset fluid override.
    pub fluid: PresetFluid,
}

impl FontSizePreset {
    /// A preset with the given size and no fluid override.
    pub fn new(size: impl Into<SizeValue>) -> Self {
        Self {
            size: Some(size.into()),
            fluid: PresetFluid::Inherit,
        }
    }

    /// Replace the fluid override.
    #[must_use]
    pub fn fluid(mut self, fluid: PresetFluid) -> Self {
        self.fluid = fluid;
        self
    }

    /// Scale between explicit bounds.
    #[must_use]
    pub fn bounds(self, bounds: FluidBounds) -> Self {
        self.fluid(PresetFluid::Bounds(bounds))
    }

    /// Decode a preset object from theme JSON.
    ///
    /// Never fails: a non-object yields a preset with no size.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        Self {
            size: map.get("size").and_then(SizeValue::from_json),
            fluid: map.get("fluid").map(PresetFluid::from_json).unwrap_or_default(),
        }
    }
}

/// Read a bound literal. Empty strings count as unset, and bare numbers
/// gain a `px` suffix so they render as valid CSS.
pub(crate) fn length_literal(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(|n| format!("{}px", format_number(n))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_sizes() {
        assert!(SizeValue::Number(0.0).is_blank());
        assert!(SizeValue::from("0").is_blank());
        assert!(SizeValue::from("").is_blank());
        assert!(!SizeValue::from("0px").is_blank());
        assert!(!SizeValue::Number(12.0).is_blank());
    }

    #[test]
    fn clamp_detection() {
        assert!(SizeValue::from("clamp(1rem, 2vw, 3rem)").is_fluid());
        assert!(!SizeValue::from("1rem").is_fluid());
        assert!(!SizeValue::Number(3.0).is_fluid());
    }

    #[test]
    fn number_displays_without_fraction() {
        assert_eq!(SizeValue::Number(33.0).to_string(), "33");
        assert_eq!(SizeValue::Number(70.175).to_string(), "70.175");
    }

    #[test]
    fn empty_bounds_do_not_activate() {
        assert!(!PresetFluid::Bounds(FluidBounds::default()).is_active());
        assert!(PresetFluid::Bounds(FluidBounds::default().max("80px")).is_active());
        assert!(PresetFluid::Enabled.is_active());
        assert!(!PresetFluid::Inherit.is_active());
        assert!(!PresetFluid::Disabled.is_active());
    }

    #[test]
    fn decodes_fluid_shapes() {
        let cases = [
            (json!(false), PresetFluid::Disabled),
            (json!(true), PresetFluid::Enabled),
            (json!(null), PresetFluid::Inherit),
            (json!([]), PresetFluid::Inherit),
            (json!("yes"), PresetFluid::Inherit),
            (
                json!({ "min": "70px", "max": "125px" }),
                PresetFluid::Bounds(FluidBounds::default().min("70px").max("125px")),
            ),
            (
                json!({ "min": "", "max": 30 }),
                PresetFluid::Bounds(FluidBounds::default().max("30px")),
            ),
        ];
        for (raw, expected) in cases {
            let preset = FontSizePreset::from_json(&json!({ "size": "28px", "fluid": raw }));
            assert_eq!(preset.fluid, expected, "fluid = {raw}");
        }
    }

    #[test]
    fn decodes_size_shapes() {
        assert_eq!(
            FontSizePreset::from_json(&json!({ "size": 33 })).size,
            Some(SizeValue::Number(33.0))
        );
        assert_eq!(
            FontSizePreset::from_json(&json!({ "size": "1.75rem" })).size,
            Some(SizeValue::from("1.75rem"))
        );
        assert_eq!(FontSizePreset::from_json(&json!({ "size": null })).size, None);
        assert_eq!(FontSizePreset::from_json(&json!({ "size": [1] })).size, None);
        assert_eq!(FontSizePreset::from_json(&json!("28px")), FontSizePreset::default());
    }

    #[test]
    fn serializes_as_plain_json() {
        assert_eq!(serde_json::to_value(SizeValue::Number(33.0)).unwrap(), json!(33.0));
        assert_eq!(serde_json::to_value(SizeValue::from("1rem")).unwrap(), json!("1rem"));
    }
}
