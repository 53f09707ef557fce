#![forbid(unsafe_code)]

//! Engine defaults: root size, minimum font-size limit, and viewport bounds.
//!
//! These are used whenever the normalized settings do not override them.
//! They are passed explicitly into the resolver rather than read from
//! process-wide state, so two callers with different defaults never observe
//! each other.
//!
//! ```
//! use fluidtype::FluidDefaults;
//! use fluidtype_core::Length;
//!
//! let defaults = FluidDefaults::default().maximum_viewport_width(Length::px(1280.0));
//! assert_eq!(defaults.minimum_viewport_width, Length::px(320.0));
//! ```

use fluidtype_core::{DEFAULT_ROOT_SIZE_PX, Length};

/// Font sizes at or below this are not scaled unless bounds are explicit.
pub const DEFAULT_MINIMUM_FONT_SIZE_LIMIT: Length = Length::px(14.0);
/// Viewport width where the clamp reaches its minimum.
pub const DEFAULT_MINIMUM_VIEWPORT_WIDTH: Length = Length::px(320.0);
/// Viewport width where the clamp reaches its maximum.
pub const DEFAULT_MAXIMUM_VIEWPORT_WIDTH: Length = Length::px(1600.0);

/// Defaults the resolver falls back to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidDefaults {
    /// Pixels per `rem` (and per `em`).
    pub root_size_px: f64,
    /// Floor for automatic scaling.
    pub minimum_font_size_limit: Length,
    /// Lower end of the interpolation range.
    pub minimum_viewport_width: Length,
    /// Upper end of the interpolation range.
    pub maximum_viewport_width: Length,
}

impl Default for FluidDefaults {
    fn default() -> Self {
        Self {
            root_size_px: DEFAULT_ROOT_SIZE_PX,
            minimum_font_size_limit: DEFAULT_MINIMUM_FONT_SIZE_LIMIT,
            minimum_viewport_width: DEFAULT_MINIMUM_VIEWPORT_WIDTH,
            maximum_viewport_width: DEFAULT_MAXIMUM_VIEWPORT_WIDTH,
        }
    }
}

impl FluidDefaults {
    /// Set the root size in pixels.
    #[must_use]
    pub fn root_size_px(mut self, px: f64) -> Self {
        self.root_size_px = px;
        self
    }

    /// Set the minimum font-size limit.
    #[must_use]
    pub fn minimum_font_size_limit(mut self, limit: Length) -> Self {
        self.minimum_font_size_limit = limit;
        self
    }

    /// Set the minimum viewport width.
    #[must_use]
    pub fn minimum_viewport_width(mut self, width: Length) -> Self {
        self.minimum_viewport_width = width;
        self
    }

    /// Set the maximum viewport width.
    #[must_use]
    pub fn maximum_viewport_width(mut self, width: Length) -> Self {
        self.maximum_viewport_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluidtype_core::Unit;

    #[test]
    fn default_values() {
        let defaults = FluidDefaults::default();
        assert_eq!(defaults.root_size_px, 16.0);
        assert_eq!(defaults.minimum_font_size_limit, Length::px(14.0));
        assert_eq!(defaults.minimum_viewport_width, Length::px(320.0));
        assert_eq!(defaults.maximum_viewport_width, Length::px(1600.0));
    }

    #[test]
    fn builder_overrides_single_field() {
        let defaults = FluidDefaults::default()
            .minimum_font_size_limit(Length::new(1.0, Unit::Rem))
            .root_size_px(18.0);
        assert_eq!(defaults.minimum_font_size_limit, Length::new(1.0, Unit::Rem));
        assert_eq!(defaults.root_size_px, 18.0);
        assert_eq!(defaults.maximum_viewport_width, Length::px(1600.0));
    }
}
