//! Preview panel positioning.
//!
//! Narrow windows stack the preview under the form; wider ones keep it
//! pinned beside the form while the user scrolls.

/// Widths at or below this many logical pixels use static positioning.
pub const DEFAULT_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    Static,
    Sticky,
}

impl Positioning {
    /// Positioning for a viewport `width` wide. The breakpoint itself is static.
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Positioning::Static
        } else {
            Positioning::Sticky
        }
    }

    /// Value for the CSS `position` property.
    pub fn as_css(self) -> &'static str {
        match self {
            Positioning::Static => "static",
            Positioning::Sticky => "sticky",
        }
    }
}
