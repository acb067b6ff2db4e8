//! Live card preview.
//!
//! [`render_preview`] is a pure function of the form snapshot and the images
//! resolved so far. Callers replace the whole preview with its output on
//! every input event.

use std::fmt::Write as _;

use crate::images::ImageSlots;
use crate::snapshot::{FormSnapshot, ImageField, TextField};

/// Placeholder shown when the first name is empty.
pub const FIRST_NAME_PLACEHOLDER: &str = "First";
/// Placeholder shown when the last name is empty.
pub const LAST_NAME_PLACEHOLDER: &str = "Last";

/// An image shown above the name heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub field: ImageField,
    pub data_url: String,
}

/// A paragraph rendered for one optional text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewParagraph {
    pub field: TextField,
    pub text: String,
}

/// Everything the preview region shows for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFragment {
    pub images: Vec<PreviewImage>,
    pub heading: String,
    pub paragraphs: Vec<PreviewParagraph>,
}

/// Build the preview for `snapshot`.
pub fn render_preview(snapshot: &FormSnapshot, images: &ImageSlots) -> PreviewFragment {
    let heading = format!(
        "{} {}",
        non_empty_or(snapshot.text(TextField::Fname), FIRST_NAME_PLACEHOLDER),
        non_empty_or(snapshot.text(TextField::Lname), LAST_NAME_PLACEHOLDER),
    );

    let paragraphs = TextField::PREVIEWED
        .into_iter()
        .filter(|f| !snapshot.text(*f).is_empty())
        .map(|field| PreviewParagraph {
            field,
            text: snapshot.text(field).to_string(),
        })
        .collect();

    let images = images
        .in_render_order()
        .map(|(field, url)| PreviewImage {
            field,
            data_url: url.to_string(),
        })
        .collect();

    PreviewFragment {
        images,
        heading,
        paragraphs,
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

impl PreviewFragment {
    /// Markup for the preview container.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for image in &self.images {
            let _ = writeln!(
                html,
                r#"<img src="{}" alt="{}" style="max-width: 100%; height: auto;">"#,
                escape_html(&image.data_url),
                image.field.name(),
            );
        }
        let _ = writeln!(html, "<h2>{}</h2>", escape_html(&self.heading));
        for paragraph in &self.paragraphs {
            let _ = writeln!(html, "<p>{}</p>", escape_html(&paragraph.text));
        }
        html
    }

    pub fn paragraph(&self, field: TextField) -> Option<&str> {
        self.paragraphs
            .iter()
            .find(|p| p.field == field)
            .map(|p| p.text.as_str())
    }
}

/// Escape text for inclusion in element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SelectedFile;

    #[test]
    fn empty_form_uses_placeholders() {
        let fragment = render_preview(&FormSnapshot::new(), &ImageSlots::new());
        assert_eq!(fragment.heading, "First Last");
        assert!(fragment.paragraphs.is_empty());
        assert!(fragment.images.is_empty());
    }

    #[test]
    fn first_name_only() {
        let snapshot = FormSnapshot::new().with_text(TextField::Fname, "Ada");
        let fragment = render_preview(&snapshot, &ImageSlots::new());
        assert_eq!(fragment.to_html(), "<h2>Ada Last</h2>\n");
    }

    #[test]
    fn paragraphs_follow_field_order() {
        let snapshot = FormSnapshot::new()
            .with_text(TextField::Desc, "Analytical engines")
            .with_text(TextField::Pronouns, "she/her")
            .with_text(TextField::Biz, "Babbage & Co");
        let fragment = render_preview(&snapshot, &ImageSlots::new());

        let fields: Vec<_> = fragment.paragraphs.iter().map(|p| p.field).collect();
        assert_eq!(fields, vec![TextField::Pronouns, TextField::Biz, TextField::Desc]);
        assert_eq!(fragment.paragraph(TextField::Biz), Some("Babbage & Co"));
        assert!(fragment.to_html().contains("<p>Babbage &amp; Co</p>"));
    }

    #[test]
    fn extended_fields_are_not_previewed() {
        let snapshot = FormSnapshot::new()
            .with_text(TextField::Key, "-----BEGIN PGP PUBLIC KEY BLOCK-----")
            .with_text(TextField::HostedUrl, "https://cards.example/ada");
        let fragment = render_preview(&snapshot, &ImageSlots::new());
        assert!(fragment.paragraphs.is_empty());
    }

    #[test]
    fn images_render_before_heading_in_fixed_order() {
        let mut slots = ImageSlots::new();
        slots.insert(ImageField::Logo, SelectedFile::new("l.png"), "data:l".into());
        slots.insert(ImageField::Photo, SelectedFile::new("p.png"), "data:p".into());

        let fragment = render_preview(&FormSnapshot::new(), &slots);
        let order: Vec<_> = fragment.images.iter().map(|i| i.field).collect();
        assert_eq!(order, vec![ImageField::Photo, ImageField::Logo]);

        let html = fragment.to_html();
        assert!(html.find("data:p").unwrap() < html.find("data:l").unwrap());
        assert!(html.find("data:l").unwrap() < html.find("<h2>").unwrap());
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html(r#"<b>"x" & 'y'</b>"#), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
    }
}
