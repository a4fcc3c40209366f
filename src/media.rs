//! Image uploads embedded as data URLs.
//!
//! The API stores images inline, so a picked file is read, sniffed for its
//! format and turned into a `data:` URL placed in the form payload.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Failed to read image '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a recognised image")]
    NotAnImage { path: PathBuf },
}

/// Source of files the user chose to upload.
pub trait FileSelector {
    fn select(&self) -> Vec<PathBuf>;
}

/// A selection fixed up front, e.g. from command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct FixedSelection(pub Vec<PathBuf>);

impl FileSelector for FixedSelection {
    fn select(&self) -> Vec<PathBuf> {
        self.0.clone()
    }
}

/// Encodes image bytes as `data:{mime};base64,...`.
///
/// Returns `None` when the bytes are not a known image format.
pub fn encode_data_url(bytes: &[u8]) -> Option<String> {
    let format = image::guess_format(bytes).ok()?;
    Some(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes)
    ))
}

pub fn read_data_url(path: &Path) -> Result<String, MediaError> {
    let bytes = fs::read(path).map_err(|e| MediaError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    encode_data_url(&bytes).ok_or_else(|| MediaError::NotAnImage {
        path: path.to_path_buf(),
    })
}

/// Reads every selected file, in selection order.
pub fn collect_data_urls(selector: &dyn FileSelector) -> Result<Vec<String>, MediaError> {
    selector
        .select()
        .iter()
        .map(|path| read_data_url(path))
        .collect()
}

/// Sets a single-image field (e.g. a project's main image).
pub fn set_image(payload: &mut Map<String, Value>, field: &str, url: String) {
    payload.insert(field.to_string(), Value::String(url));
}

/// Appends images to a gallery field, keeping existing entries first.
///
/// A field holding anything other than an array is replaced.
pub fn append_gallery(payload: &mut Map<String, Value>, field: &str, urls: Vec<String>) {
    let entry = payload
        .entry(field.to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    if !entry.is_array() {
        *entry = Value::Array(Vec::new());
    }
    if let Value::Array(photos) = entry {
        photos.extend(urls.into_iter().map(Value::String));
    }
}
