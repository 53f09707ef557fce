use fluidtype_core::ParseLengthError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FluidError>;

/// Why a fluid `clamp()` value could not be computed.
///
/// [`font_size_value`](crate::font_size_value) never surfaces these; it
/// falls back to the author's literal size. They are returned directly by
/// [`compute_fluid_value`](crate::compute_fluid_value).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FluidError {
    #[error("{role} {raw:?} is not a supported length: {source}")]
    UnsupportedLength {
        role: &'static str,
        raw: String,
        #[source]
        source: ParseLengthError,
    },

    #[error("no font size, minimum, or maximum to scale between")]
    MissingFontSize,

    #[error("font size {size} is at or below the minimum font size limit {limit}")]
    BelowMinimum { size: String, limit: String },

    #[error("viewport span is empty ({min} to {max})")]
    ZeroViewportSpan { min: String, max: String },

    #[error("{role} {value} cannot be rounded to a finite CSS number")]
    NonFinite { role: &'static str, value: f64 },
}

impl FluidError {
    #[must_use]
    pub fn unsupported(role: &'static str, raw: impl Into<String>, source: ParseLengthError) -> Self {
        Self::UnsupportedLength {
            role,
            raw: raw.into(),
            source,
        }
    }

    /// Whether the failure comes from author input rather than from the
    /// size sitting under the configured floor.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::BelowMinimum { .. })
    }
}
