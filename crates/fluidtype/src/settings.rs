#![forbid(unsafe_code)]

//! Global typography settings and their normalization.
//!
//! [`fluid_typography_options`] folds the document-wide typography settings
//! and the layout's wide size into a single [`FluidConfig`] that is threaded
//! into every preset resolution.
//!
//! # Precedence
//!
//! 1. An explicit `fluid: false` always wins, whatever the layout says.
//! 2. An explicit `maxViewportWidth` is never replaced by `layout.wideSize`.
//! 3. `layout.wideSize` only fills a missing `maxViewportWidth` on an
//!    options object; `fluid: true` stays a plain toggle.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::preset::length_literal;

/// Document-wide settings as far as typography resolution cares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalSettings {
    pub typography: Option<TypographySettings>,
    pub layout: Option<LayoutSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypographySettings {
    pub fluid: Option<FluidSetting>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutSettings {
    /// Width of wide-aligned content; the fallback viewport cap.
    pub wide_size: Option<String>,
}

/// The `typography.fluid` value as authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FluidSetting {
    Toggle(bool),
    Options(FluidOptions),
}

/// Custom fluid options. The named fields are raw length literals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_viewport_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_viewport_width: Option<String>,
    /// Keys the engine does not read, carried through to serialization.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const OPTION_KEYS: [&str; 3] = ["maxViewportWidth", "minFontSize", "minViewportWidth"];

impl FluidOptions {
    #[must_use]
    pub fn max_viewport_width(mut self, width: impl Into<String>) -> Self {
        self.max_viewport_width = Some(width.into());
        self
    }

    #[must_use]
    pub fn min_font_size(mut self, size: impl Into<String>) -> Self {
        self.min_font_size = Some(size.into());
        self
    }

    #[must_use]
    pub fn min_viewport_width(mut self, width: impl Into<String>) -> Self {
        self.min_viewport_width = Some(width.into());
        self
    }

    fn from_json(map: &Map<String, Value>) -> Self {
        Self {
            max_viewport_width: map.get("maxViewportWidth").and_then(length_literal),
            min_font_size: map.get("minFontSize").and_then(length_literal),
            min_viewport_width: map.get("minViewportWidth").and_then(length_literal),
            extra: map
                .iter()
                .filter(|(key, _)| !OPTION_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }
}

/// Normalized fluid typography configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FluidConfig {
    /// Nothing configured globally; presets decide.
    #[default]
    Unset,
    /// Explicitly disabled globally.
    Disabled,
    /// Enabled with engine defaults.
    Enabled,
    /// Enabled with custom options (possibly empty).
    Custom(FluidOptions),
}

impl FluidConfig {
    /// Whether the global configuration turns fluid scaling on.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Enabled | Self::Custom(_))
    }

    /// Custom options, if any.
    #[must_use]
    pub fn options(&self) -> Option<&FluidOptions> {
        match self {
            Self::Custom(options) => Some(options),
            _ => None,
        }
    }
}

impl Serialize for FluidConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_none(),
            Self::Disabled => serializer.serialize_bool(false),
            Self::Enabled => serializer.serialize_bool(true),
            Self::Custom(options) => options.serialize(serializer),
        }
    }
}

/// Normalize global settings into a [`FluidConfig`].
#[must_use]
pub fn fluid_typography_options(settings: Option<&GlobalSettings>) -> FluidConfig {
    let Some(settings) = settings else {
        return FluidConfig::Unset;
    };
    let Some(fluid) = settings
        .typography
        .as_ref()
        .and_then(|typography| typography.fluid.as_ref())
    else {
        return FluidConfig::Unset;
    };

    match fluid {
        FluidSetting::Toggle(false) => FluidConfig::Disabled,
        FluidSetting::Toggle(true) => FluidConfig::Enabled,
        FluidSetting::Options(options) => {
            let mut options = options.clone();
            if options.max_viewport_width.is_none() {
                options.max_viewport_width = settings
                    .layout
                    .as_ref()
                    .and_then(|layout| layout.wide_size.clone());
            }
            FluidConfig::Custom(options)
        }
    }
}

impl GlobalSettings {
    /// Settings with only `typography.fluid` set.
    #[must_use]
    pub fn fluid(setting: FluidSetting) -> Self {
        Self {
            typography: Some(TypographySettings {
                fluid: Some(setting),
            }),
            layout: None,
        }
    }

    /// Set `layout.wideSize`.
    #[must_use]
    pub fn wide_size(mut self, wide_size: impl Into<String>) -> Self {
        self.layout = Some(LayoutSettings {
            wide_size: Some(wide_size.into()),
        });
        self
    }

    /// Decode the `settings` object of a theme configuration.
    ///
    /// Never fails: shapes that are not understood are treated as absent.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let typography = value
            .get("typography")
            .and_then(Value::as_object)
            .map(|typography| TypographySettings {
                fluid: typography.get("fluid").and_then(|fluid| match fluid {
                    Value::Bool(enabled) => Some(FluidSetting::Toggle(*enabled)),
                    Value::Object(map) => Some(FluidSetting::Options(FluidOptions::from_json(map))),
                    _ => None,
                }),
            });
        let layout = value
            .get("layout")
            .and_then(Value::as_object)
            .map(|layout| LayoutSettings {
                wide_size: layout.get("wideSize").and_then(length_literal),
            });
        Self { typography, layout }
    }
}
