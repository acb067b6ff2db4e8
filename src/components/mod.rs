//! UI Components for Cardforge.

mod card_form;
mod card_preview;
mod generated_url;
pub mod images;
mod vcard_export;

pub use card_form::CardForm;
pub use card_preview::CardPreview;
pub use generated_url::GeneratedUrl;
pub use vcard_export::VcardExport;
