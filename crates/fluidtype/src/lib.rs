#![forbid(unsafe_code)]

//! Fluid typography: turn font-size presets into viewport-responsive CSS.
//!
//! # Role in fluidtype
//! A theme declares named font sizes and, optionally, global fluid
//! typography settings. This crate decides, per preset, whether the size is
//! emitted as authored or as a `clamp()` expression that scales with the
//! viewport between a minimum and maximum size.
//!
//! # This crate provides
//! - [`fluid_typography_options`]: normalize global settings (plus the
//!   layout's wide size) into a [`FluidConfig`].
//! - [`font_size_value`]: resolve one [`FontSizePreset`] against a
//!   [`FluidConfig`].
//! - [`compute_fluid_value`]: the clamp computation on its own, for callers
//!   that already know their bounds.
//! - Permissive decoding of theme JSON ([`GlobalSettings::from_json`],
//!   [`FontSizePreset::from_json`]).
//!
//! # Example
//!
//! ```
//! use fluidtype::{FontSizePreset, GlobalSettings, SizeValue, font_size_value, fluid_typography_options};
//! use serde_json::json;
//!
//! let settings = GlobalSettings::from_json(&json!({ "typography": { "fluid": true } }));
//! let config = fluid_typography_options(Some(&settings));
//!
//! let preset = FontSizePreset::from_json(&json!({ "size": "1.75rem" }));
//! assert_eq!(
//!     font_size_value(&preset, &config),
//!     Some(SizeValue::from("clamp(1.119rem, 1.119rem + ((1vw - 0.2rem) * 0.789), 1.75rem)")),
//! );
//! ```
//!
//! Everything here is pure: no I/O, no caches, no global state. Resolution
//! never fails; anything the engine cannot scale comes back as authored.

pub mod defaults;
pub mod error;
pub mod fluid;
pub mod font_size;
pub mod preset;
pub mod settings;

pub use defaults::FluidDefaults;
pub use error::{FluidError, Result};
pub use fluid::{FluidSizeRequest, compute_fluid_value, minimum_font_size_factor};
pub use font_size::{font_size_value, font_size_value_with};
pub use preset::{FluidBounds, FontSizePreset, PresetFluid, SizeValue};
pub use settings::{
    FluidConfig, FluidOptions, FluidSetting, GlobalSettings, LayoutSettings, TypographySettings,
    fluid_typography_options,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_thread_safe() {
        assert_send_sync::<FontSizePreset>();
        assert_send_sync::<FluidConfig>();
        assert_send_sync::<FluidDefaults>();
        assert_send_sync::<FluidError>();
    }

    #[test]
    fn settings_feed_resolution() {
        let settings = GlobalSettings::fluid(FluidSetting::Options(
            FluidOptions::default().min_font_size("16px"),
        ));
        let config = fluid_typography_options(Some(&settings));
        assert_eq!(
            font_size_value(&FontSizePreset::new("17px"), &config),
            Some(SizeValue::from(
                "clamp(16px, 1rem + ((1vw - 3.2px) * 0.078), 17px)"
            ))
        );
    }
}
