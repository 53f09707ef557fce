#![forbid(unsafe_code)]

//! Per-preset font-size resolution.
//!
//! [`font_size_value`] decides whether a preset's size is emitted as
//! authored or replaced by a fluid `clamp()` expression.
//!
//! # Decision order
//!
//! The guards run top to bottom and the first match returns the size
//! unchanged:
//!
//! | # | condition                                   |
//! |---|---------------------------------------------|
//! | 1 | preset `fluid: false`                       |
//! | 2 | size missing, zero, or empty                |
//! | 3 | size already contains `clamp(`              |
//! | 4 | neither settings nor preset enable fluidity |
//!
//! Otherwise the clamp is computed with [`compute_fluid_value`]. Any error
//! there (unsupported unit, size at or below the floor, empty viewport
//! span) also yields the size unchanged.
//!
//! # Invariants
//!
//! 1. Inputs are never mutated.
//! 2. The same `(preset, config, defaults)` always yields the same output.
//! 3. A value that is already a `clamp()` is returned byte-for-byte.

use crate::defaults::FluidDefaults;
use crate::fluid::{FluidSizeRequest, compute_fluid_value};
use crate::preset::{FontSizePreset, PresetFluid, SizeValue};
use crate::settings::FluidConfig;

/// Resolve a preset's size against the normalized configuration.
#[must_use]
pub fn font_size_value(preset: &FontSizePreset, config: &FluidConfig) -> Option<SizeValue> {
    font_size_value_with(preset, config, &FluidDefaults::default())
}

/// [`font_size_value`] with explicit engine defaults.
#[must_use]
pub fn font_size_value_with(
    preset: &FontSizePreset,
    config: &FluidConfig,
    defaults: &FluidDefaults,
) -> Option<SizeValue> {
    if preset.fluid == PresetFluid::Disabled {
        return preset.size.clone();
    }
    let size = preset.size.as_ref()?;
    if size.is_blank() || size.is_fluid() {
        return Some(size.clone());
    }
    if !config.is_active() && !preset.fluid.is_active() {
        return Some(size.clone());
    }

    let bounds = preset.fluid.bounds();
    let options = config.options();
    let request = FluidSizeRequest {
        font_size: Some(size),
        minimum_font_size: bounds.and_then(|b| b.min.as_deref()),
        maximum_font_size: bounds.and_then(|b| b.max.as_deref()),
        minimum_font_size_limit: options.and_then(|o| o.min_font_size.as_deref()),
        minimum_viewport_width: options.and_then(|o| o.min_viewport_width.as_deref()),
        maximum_viewport_width: options.and_then(|o| o.max_viewport_width.as_deref()),
    };

    match compute_fluid_value(&request, defaults) {
        Ok(value) => {
            tracing::trace!(size = %size, value = %value, "resolved fluid font size");
            Some(SizeValue::Text(value))
        }
        Err(error) => {
            tracing::debug!(
                size = %size,
                reason = %error,
                input_error = error.is_input_error(),
                "fluid font size unavailable, keeping authored size"
            );
            Some(size.clone())
        }
    }
}
