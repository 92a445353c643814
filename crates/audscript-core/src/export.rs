//! Local export of transcription results.
//!
//! Pure filesystem work: the last result is written as UTF-8 under a fixed
//! filename. No network interaction.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Fixed artifact filename
pub const EXPORT_FILENAME: &str = "transcription.txt";

/// Write `text` to `transcription.txt` under `dir` and return its path.
pub fn export_transcription(text: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILENAME);
    std::fs::write(&path, text.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
