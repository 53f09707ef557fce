#![forbid(unsafe_code)]

//! Fluid `clamp()` computation.
//!
//! Given a base size and optional explicit bounds, produce
//!
//! ```text
//! clamp(<min>, <min as rem>rem + ((1vw - <min viewport / 100><unit>) * <slope>), <max>)
//! ```
//!
//! where the working `<unit>` is the unit of the resolved minimum and the
//! slope is the change in size per 1% of viewport width between the minimum
//! and maximum viewport widths.
//!
//! # Automatic minimum
//!
//! When no minimum is given it is derived from the base size with a
//! logarithmic shrink, `1 - 0.075 * log2(base_px)`, held between 0.25 and
//! 0.75 of the base. Small sizes shrink a little, large sizes a lot. The
//! result is raised to the minimum font-size limit, but never above the base
//! size itself.
//!
//! # Failure Modes
//!
//! Every failure is a [`FluidError`]; nothing panics. Explicit bounds are
//! trusted as given, so a minimum larger than the maximum produces a
//! negative slope rather than an error.

use fluidtype_core::{Length, Unit, format_number, parse_length, round3};

use crate::defaults::FluidDefaults;
use crate::error::{FluidError, Result};
use crate::preset::SizeValue;

/// Log-curve slope of the automatic minimum.
const MINIMUM_FONT_SIZE_LOG_SLOPE: f64 = 0.075;
/// Smallest fraction of the base the automatic minimum may be.
const MINIMUM_FONT_SIZE_FACTOR_MIN: f64 = 0.25;
/// Largest fraction of the base the automatic minimum may be.
const MINIMUM_FONT_SIZE_FACTOR_MAX: f64 = 0.75;

/// Inputs to [`compute_fluid_value`].
///
/// Length fields are raw CSS literals; `None` falls back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FluidSizeRequest<'a> {
    /// Base size. Optional when both bounds are given.
    pub font_size: Option<&'a SizeValue>,
    pub minimum_font_size: Option<&'a str>,
    pub maximum_font_size: Option<&'a str>,
    /// Overrides [`FluidDefaults::minimum_font_size_limit`] when it parses.
    pub minimum_font_size_limit: Option<&'a str>,
    pub minimum_viewport_width: Option<&'a str>,
    pub maximum_viewport_width: Option<&'a str>,
}

impl<'a> FluidSizeRequest<'a> {
    /// A request scaling `font_size` with computed bounds.
    #[must_use]
    pub fn for_size(font_size: &'a SizeValue) -> Self {
        Self {
            font_size: Some(font_size),
            ..Self::default()
        }
    }
}

/// Shrink factor for an automatic minimum, given the base size in pixels.
#[must_use]
pub fn minimum_font_size_factor(base_px: f64) -> f64 {
    (1.0 - MINIMUM_FONT_SIZE_LOG_SLOPE * base_px.log2())
        .max(MINIMUM_FONT_SIZE_FACTOR_MIN)
        .min(MINIMUM_FONT_SIZE_FACTOR_MAX)
}

/// Compute a fluid `clamp()` expression.
pub fn compute_fluid_value(request: &FluidSizeRequest<'_>, defaults: &FluidDefaults) -> Result<String> {
    let root = defaults.root_size_px;

    // An unparseable limit override is ignored, not fatal.
    let limit = request
        .minimum_font_size_limit
        .and_then(|raw| raw.parse::<Length>().ok())
        .unwrap_or(defaults.minimum_font_size_limit);

    let mut minimum = request.minimum_font_size.map(str::to_string);
    let mut maximum = request.maximum_font_size.map(str::to_string);

    if let Some(size) = request.font_size {
        let base = size
            .to_length()
            .map_err(|source| FluidError::unsupported("font size", size.to_string(), source))?;
        let base = rounded(base, "font size")?;
        let limit = rounded(limit.coerce_to(base.unit, root), "minimum font size limit")?;
        let has_limit = limit.value > 0.0;

        if has_limit && minimum.is_none() && maximum.is_none() && base.value <= limit.value {
            return Err(FluidError::BelowMinimum {
                size: size.to_string(),
                limit: limit.to_string(),
            });
        }

        if maximum.is_none() {
            maximum = Some(base.to_string());
        }

        if minimum.is_none() {
            let factor = minimum_font_size_factor(base.to_px(root));
            let scaled = round3(base.value * factor).ok_or(FluidError::NonFinite {
                role: "minimum font size",
                value: base.value * factor,
            })?;
            // The floor never lifts the minimum above the base size.
            let floor = if limit.value > base.value { base } else { limit };
            minimum = Some(if has_limit && scaled < limit.value {
                floor.to_string()
            } else {
                Length::new(scaled, base.unit).to_string()
            });
        }
    }

    let (Some(minimum), Some(maximum)) = (minimum, maximum) else {
        return Err(FluidError::MissingFontSize);
    };

    let min = length("minimum font size", &minimum, None, root)?;
    let unit = min.unit;
    let max = length("maximum font size", &maximum, Some(unit), root)?;
    let min_rem = length("minimum font size", &minimum, Some(Unit::Rem), root)?;

    let max_viewport = viewport(
        "maximum viewport width",
        request.maximum_viewport_width,
        defaults.maximum_viewport_width,
        unit,
        root,
    )?;
    let min_viewport = viewport(
        "minimum viewport width",
        request.minimum_viewport_width,
        defaults.minimum_viewport_width,
        unit,
        root,
    )?;

    let span = max_viewport.value - min_viewport.value;
    if span == 0.0 {
        return Err(FluidError::ZeroViewportSpan {
            min: min_viewport.to_string(),
            max: max_viewport.to_string(),
        });
    }

    let offset = round3(min_viewport.value / 100.0).ok_or(FluidError::NonFinite {
        role: "viewport offset",
        value: min_viewport.value / 100.0,
    })?;
    let raw_slope = 100.0 * ((max.value - min.value) / span);
    let slope = match round3(raw_slope) {
        // A flat slope is written as 1.
        Some(slope) if slope == 0.0 => 1.0,
        Some(slope) => slope,
        None => {
            return Err(FluidError::NonFinite {
                role: "slope",
                value: raw_slope,
            });
        }
    };

    Ok(format!(
        "clamp({minimum}, {min_rem} + ((1vw - {offset}{unit}) * {slope}), {maximum})",
        offset = format_number(offset),
        slope = format_number(slope),
    ))
}

fn rounded(length: Length, role: &'static str) -> Result<Length> {
    length.rounded().ok_or(FluidError::NonFinite {
        role,
        value: length.value,
    })
}

fn length(role: &'static str, raw: &str, coerce_to: Option<Unit>, root: f64) -> Result<Length> {
    parse_length(raw, coerce_to, root).map_err(|source| FluidError::unsupported(role, raw, source))
}

fn viewport(
    role: &'static str,
    raw: Option<&str>,
    fallback: Length,
    unit: Unit,
    root: f64,
) -> Result<Length> {
    match raw {
        Some(raw) => length(role, raw, Some(unit), root),
        None => rounded(fallback.coerce_to(unit, root), role),
    }
}
