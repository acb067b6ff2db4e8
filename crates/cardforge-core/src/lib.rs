//! Cardforge Core Library
//!
//! Building blocks for a digital business card form with live preview.
//!
//! ## Overview
//!
//! - [`FormSnapshot`] - the form's values at one instant
//! - [`render_preview`] - pure snapshot-to-preview rendering
//! - [`ImageSlots`] - image previews as data URLs, one per field
//! - [`CardClient`] / [`SubmissionState`] - posting the card to the server
//! - [`Positioning`] - sticky or static preview panel by window width
//! - [`to_vcard`] - vCard export
//!
//! ## Quick Start
//!
//! ```ignore
//! use cardforge_core::{render_preview, CardClient, CardConfig, FormSnapshot, ImageSlots, TextField};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let snapshot = FormSnapshot::new()
//!         .with_text(TextField::Fname, "Ada")
//!         .with_text(TextField::Title, "Analyst");
//!
//!     let mut images = ImageSlots::new();
//!     images.resolve(&snapshot).await;
//!     println!("{}", render_preview(&snapshot, &images).to_html());
//!
//!     let client = CardClient::new(&CardConfig::load(None)?)?;
//!     println!("{:?}", client.submit(&snapshot).await?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod images;
pub mod layout;
pub mod logging;
pub mod preview;
pub mod snapshot;
pub mod submit;
pub mod vcard;

// Re-exports
pub use config::CardConfig;
pub use error::{CardError, CardResult};
pub use images::{encode_data_url, read_data_url, ImageSlots, ResolveReport};
pub use layout::{Positioning, DEFAULT_BREAKPOINT};
pub use preview::{render_preview, PreviewFragment, PreviewImage, PreviewParagraph};
pub use snapshot::{FormSnapshot, ImageField, SelectedFile, TextField};
pub use submit::{CardClient, FieldErrors, SubmissionOutcome, SubmissionState};
pub use vcard::to_vcard;
