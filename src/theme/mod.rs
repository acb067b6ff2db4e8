//! Visual theme for Cardforge.

mod styles;

pub use styles::GLOBAL_STYLES;
