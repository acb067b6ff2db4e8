//! Image handling components
//!
//! Pick and clear the card's logo, cover and profile photo.

mod image_picker;

pub use image_picker::ImagePicker;
