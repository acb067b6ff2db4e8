//! Image previews as data URLs.
//!
//! Selected files are read off disk and inlined as base64 data URLs so the
//! preview can show them without a server round-trip. [`ImageSlots`] holds at
//! most one resolved image per field; a new file replaces the old entry and a
//! cleared field drops it.

use std::collections::BTreeMap;
use std::path::Path;

use base64::Engine;
use futures::future::join_all;
use image::ImageFormat;

use crate::error::{CardError, CardResult};
use crate::snapshot::{FormSnapshot, ImageField, SelectedFile};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Build a `data:` URL for `bytes`.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, encoded)
}

/// Guess the MIME type from the file contents, then from its extension.
pub fn sniff_mime(bytes: &[u8], path: &Path) -> &'static str {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type();
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => "image/svg+xml",
        Some(ext) => ImageFormat::from_extension(ext)
            .map(|f| f.to_mime_type())
            .unwrap_or(FALLBACK_MIME),
        None => FALLBACK_MIME,
    }
}

/// Read a selected file and encode it as a data URL.
pub async fn read_data_url(field: ImageField, path: &Path) -> CardResult<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CardError::ImageRead {
            field: field.name().to_string(),
            reason: e.to_string(),
        })?;
    let mime = sniff_mime(&bytes, path);
    tracing::debug!(%field, mime, len = bytes.len(), "read image preview");
    Ok(encode_data_url(mime, &bytes))
}

/// A file waiting to be read for a field.
pub type PendingImage = (ImageField, SelectedFile);

/// Outcome of reading one pending image.
pub type ImageRead = (ImageField, SelectedFile, CardResult<String>);

/// Read every pending file concurrently and wait for all of them.
pub async fn read_pending(pending: Vec<PendingImage>) -> Vec<ImageRead> {
    join_all(pending.into_iter().map(|(field, source)| async move {
        let result = read_data_url(field, source.path()).await;
        (field, source, result)
    }))
    .await
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedImage {
    source: SelectedFile,
    data_url: String,
}

/// Summary of one [`ImageSlots::resolve`] pass.
#[derive(Debug, Default)]
pub struct ResolveReport {
    pub loaded: Vec<ImageField>,
    pub failed: Vec<(ImageField, CardError)>,
}

/// Resolved image previews, one slot per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSlots {
    slots: BTreeMap<ImageField, ResolvedImage>,
}

impl ImageSlots {
    /// Order images appear in the preview, top first.
    pub const RENDER_ORDER: [ImageField; 3] =
        [ImageField::Photo, ImageField::Cover, ImageField::Logo];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ImageField) -> Option<&str> {
        self.slots.get(&field).map(|r| r.data_url.as_str())
    }

    pub fn insert(&mut self, field: ImageField, source: SelectedFile, data_url: String) {
        self.slots.insert(field, ResolvedImage { source, data_url });
    }

    pub fn remove(&mut self, field: ImageField) {
        self.slots.remove(&field);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop slots whose field was cleared or now points at another file.
    pub fn retain_selected(&mut self, snapshot: &FormSnapshot) {
        self.slots
            .retain(|field, resolved| snapshot.image(*field) == Some(&resolved.source));
    }

    /// Files selected in `snapshot` that have no resolved slot yet.
    pub fn pending(&self, snapshot: &FormSnapshot) -> Vec<PendingImage> {
        snapshot
            .selected_images()
            .filter(|(field, source)| {
                self.slots.get(field).map(|r| &r.source) != Some(*source)
            })
            .map(|(field, source)| (field, source.clone()))
            .collect()
    }

    /// Store finished reads. Reads for a file the snapshot no longer selects
    /// are discarded so a slow read cannot resurrect a stale image.
    pub fn apply(&mut self, snapshot: &FormSnapshot, reads: Vec<ImageRead>) -> ResolveReport {
        let mut report = ResolveReport::default();
        for (field, source, result) in reads {
            if snapshot.image(field) != Some(&source) {
                tracing::debug!(%field, "discarding superseded image read");
                continue;
            }
            match result {
                Ok(data_url) => {
                    self.insert(field, source, data_url);
                    report.loaded.push(field);
                }
                Err(e) => {
                    tracing::warn!(%field, "image preview unavailable: {}", e);
                    self.remove(field);
                    report.failed.push((field, e));
                }
            }
        }
        report
    }

    /// Bring the slots in line with `snapshot`, reading any new files first.
    pub async fn resolve(&mut self, snapshot: &FormSnapshot) -> ResolveReport {
        self.retain_selected(snapshot);
        let reads = read_pending(self.pending(snapshot)).await;
        self.apply(snapshot, reads)
    }

    /// Resolved images in preview order.
    pub fn in_render_order(&self) -> impl Iterator<Item = (ImageField, &str)> {
        Self::RENDER_ORDER
            .into_iter()
            .filter_map(|f| self.get(f).map(|url| (f, url)))
    }
}
