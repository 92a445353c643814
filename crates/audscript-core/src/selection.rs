//! Selected-file handling for the transcription form.
//!
//! Selection never rejects a file: the accepted-format list is advisory
//! only, matching the upload form it backs. Whatever bytes were selected
//! are what the request uploads.

use anyhow::{Context, Result};
use std::path::Path;

/// Audio formats the form advertises
pub const ACCEPTED_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "flac"];

/// An audio file picked by the user, held in memory until submitted.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    /// Original filename, carried into the multipart upload
    pub filename: String,
    /// Size in bytes, shown by the UI layer
    pub size: u64,
    /// Raw file contents
    pub data: Vec<u8>,
}

impl SelectedFile {
    /// Read a file from disk into a selection.
    pub fn load(path: &Path) -> Result<Self> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("Invalid file path: {}", path.display()))?
            .to_string();

        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Ok(Self::from_bytes(filename, data))
    }

    pub fn from_bytes(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            size: data.len() as u64,
            data,
        }
    }

    /// Whether the filename extension is on the advertised format list
    pub fn has_accepted_extension(&self) -> bool {
        ACCEPTED_EXTENSIONS.contains(&self.extension().as_str())
    }

    /// MIME type for the multipart part, derived from the filename
    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_str() {
            "mp3" => "audio/mpeg",
            "wav" => "audio/wav",
            "m4a" => "audio/mp4",
            "flac" => "audio/flac",
            _ => "application/octet-stream",
        }
    }

    fn extension(&self) -> String {
        Path::new(&self.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase()
    }
}

/// Render a byte count the way the form does: fixed two-decimal megabytes
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}
