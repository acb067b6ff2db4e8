//! Page components for Cardforge.

mod card_creator;

pub use card_creator::CardCreator;
