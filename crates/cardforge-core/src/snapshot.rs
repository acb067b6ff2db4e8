//! Form snapshots.
//!
//! A [`FormSnapshot`] is the value of the card form at one instant. The UI
//! produces a fresh snapshot on every input event and hands it to the
//! renderer and the submission client; nothing reaches back into the form.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{CardError, CardResult};

/// Text-valued fields of the card form, keyed by their wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextField {
    Fname,
    Lname,
    Pronouns,
    Title,
    Biz,
    Addr,
    Desc,
    /// OpenPGP public key block
    Key,
    /// Tracking snippet embedded in the hosted card
    Tracker,
    /// Web font embed markup
    FontLink,
    /// CSS `font-family` rule for the embedded font
    FontCss,
    /// Address the card will be hosted at
    HostedUrl,
}

impl TextField {
    /// Every text field, in form order.
    pub const ALL: [TextField; 12] = [
        TextField::Fname,
        TextField::Lname,
        TextField::Pronouns,
        TextField::Title,
        TextField::Biz,
        TextField::Addr,
        TextField::Desc,
        TextField::Key,
        TextField::Tracker,
        TextField::FontLink,
        TextField::FontCss,
        TextField::HostedUrl,
    ];

    /// Fields rendered as paragraphs under the name heading, in render order.
    pub const PREVIEWED: [TextField; 5] = [
        TextField::Pronouns,
        TextField::Title,
        TextField::Biz,
        TextField::Addr,
        TextField::Desc,
    ];

    /// Name used in the multipart body and by the server.
    pub fn name(self) -> &'static str {
        match self {
            TextField::Fname => "fname",
            TextField::Lname => "lname",
            TextField::Pronouns => "pronouns",
            TextField::Title => "title",
            TextField::Biz => "biz",
            TextField::Addr => "addr",
            TextField::Desc => "desc",
            TextField::Key => "key",
            TextField::Tracker => "tracker",
            TextField::FontLink => "font_link",
            TextField::FontCss => "font_css",
            TextField::HostedUrl => "hosted_url",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextField::Fname => "First Name",
            TextField::Lname => "Last Name",
            TextField::Pronouns => "Gender Pronouns",
            TextField::Title => "Job Title",
            TextField::Biz => "Business Name",
            TextField::Addr => "Business Address",
            TextField::Desc => "Business Description",
            TextField::Key => "OpenPGP Public Key",
            TextField::Tracker => "Tracking Code",
            TextField::FontLink => "Web Font Embed Code",
            TextField::FontCss => "Web Font CSS Rule",
            TextField::HostedUrl => "Hosted Card URL",
        }
    }

    /// Whether the form edits this field in a textarea.
    pub fn is_multiline(self) -> bool {
        matches!(
            self,
            TextField::Addr
                | TextField::Desc
                | TextField::Key
                | TextField::Tracker
                | TextField::FontLink
        )
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// File-valued fields of the card form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageField {
    Logo,
    Cover,
    Photo,
}

impl ImageField {
    /// Declaration order in the form.
    pub const ALL: [ImageField; 3] = [ImageField::Logo, ImageField::Cover, ImageField::Photo];

    pub fn name(self) -> &'static str {
        match self {
            ImageField::Logo => "logo",
            ImageField::Cover => "cover",
            ImageField::Photo => "photo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageField::Logo => "Add Logo",
            ImageField::Cover => "Add Cover Photo",
            ImageField::Photo => "Add Profile Photo",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for ImageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A file the user picked for one of the image fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// File name sent in the multipart part
    pub file_name: String,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        Self { path, file_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Value of every card form field at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    text: BTreeMap<TextField, String>,
    images: BTreeMap<ImageField, SelectedFile>,
    /// "Enable Footer Credit" checkbox
    pub footer_credit: bool,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for tests and the CLI.
    pub fn with_text(mut self, field: TextField, value: impl Into<String>) -> Self {
        self.set_text(field, value);
        self
    }

    pub fn with_image(mut self, field: ImageField, file: SelectedFile) -> Self {
        self.set_image(field, Some(file));
        self
    }

    /// Set a text field. Empty values are stored as absent.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.text.remove(&field);
        } else {
            self.text.insert(field, value);
        }
    }

    /// Current value of a text field; absent fields read as `""`.
    pub fn text(&self, field: TextField) -> &str {
        self.text.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set_image(&mut self, field: ImageField, file: Option<SelectedFile>) {
        match file {
            Some(file) => {
                self.images.insert(field, file);
            }
            None => {
                self.images.remove(&field);
            }
        }
    }

    pub fn image(&self, field: ImageField) -> Option<&SelectedFile> {
        self.images.get(&field)
    }

    /// Selected files in declaration order.
    pub fn selected_images(&self) -> impl Iterator<Item = (ImageField, &SelectedFile)> {
        ImageField::ALL
            .into_iter()
            .filter_map(|f| self.images.get(&f).map(|file| (f, file)))
    }

    /// Non-empty text fields in form order.
    pub fn filled_text(&self) -> impl Iterator<Item = (TextField, &str)> {
        TextField::ALL
            .into_iter()
            .filter_map(|f| self.text.get(&f).map(|v| (f, v.as_str())))
    }

    /// Set a field by its wire name. Image fields take a path.
    pub fn set_by_name(&mut self, name: &str, value: &str) -> CardResult<()> {
        if let Some(field) = TextField::from_name(name) {
            self.set_text(field, value);
        } else if let Some(field) = ImageField::from_name(name) {
            let file = (!value.is_empty()).then(|| SelectedFile::new(value));
            self.set_image(field, file);
        } else if name == "footer_credit" {
            self.footer_credit = matches!(value, "y" | "on" | "true" | "1");
        } else {
            return Err(CardError::UnknownField(name.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_read_as_empty() {
        let snapshot = FormSnapshot::new();
        for field in TextField::ALL {
            assert_eq!(snapshot.text(field), "");
        }
        assert!(snapshot.image(ImageField::Logo).is_none());
    }

    #[test]
    fn empty_value_clears_field() {
        let mut snapshot = FormSnapshot::new().with_text(TextField::Title, "CTO");
        snapshot.set_text(TextField::Title, "");
        assert_eq!(snapshot.filled_text().count(), 0);
    }

    #[test]
    fn field_names_roundtrip() {
        for field in TextField::ALL {
            assert_eq!(TextField::from_name(field.name()), Some(field));
        }
        for field in ImageField::ALL {
            assert_eq!(ImageField::from_name(field.name()), Some(field));
        }
        assert_eq!(TextField::from_name("logo"), None);
    }

    #[test]
    fn set_by_name_dispatches() {
        let mut snapshot = FormSnapshot::new();
        snapshot.set_by_name("fname", "Ada").unwrap();
        snapshot.set_by_name("photo", "/tmp/ada.png").unwrap();
        snapshot.set_by_name("footer_credit", "y").unwrap();

        assert_eq!(snapshot.text(TextField::Fname), "Ada");
        assert_eq!(
            snapshot.image(ImageField::Photo).map(|f| f.file_name.as_str()),
            Some("ada.png")
        );
        assert!(snapshot.footer_credit);
        assert!(matches!(
            snapshot.set_by_name("phone", "555"),
            Err(CardError::UnknownField(_))
        ));
    }

    #[test]
    fn selected_images_follow_declaration_order() {
        let snapshot = FormSnapshot::new()
            .with_image(ImageField::Photo, SelectedFile::new("p.png"))
            .with_image(ImageField::Logo, SelectedFile::new("l.png"));
        let order: Vec<_> = snapshot.selected_images().map(|(f, _)| f).collect();
        assert_eq!(order, vec![ImageField::Logo, ImageField::Photo]);
    }
}
