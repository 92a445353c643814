//! One-shot file transcription.
//!
//! Selects the given file, runs one attempt, prints the text (or the error
//! banner) and optionally saves the artifact.

use std::path::Path;

use anyhow::Result;

use audscript_core::{
    ApiConfig, SelectedFile, TRANSCRIPTION_FAILED_MESSAGE, TranscriptionController, format_size,
};

use crate::ui;

pub async fn run(
    config: &ApiConfig,
    file: &Path,
    save: bool,
    output_dir: Option<&Path>,
) -> Result<()> {
    let selected = SelectedFile::load(file)?;
    if !selected.has_accepted_extension() {
        ui::warn(&format!(
            "{} is not an advertised format (MP3, WAV, M4A, FLAC); sending it anyway",
            selected.filename
        ));
    }
    ui::info(&format!(
        "{} ({})",
        selected.filename,
        format_size(selected.size)
    ));

    let mut controller = TranscriptionController::new(config)?;
    controller.select_file(Some(selected));

    println!("Transcribing...");
    controller.submit().await;

    match controller.transcription() {
        Some(text) => {
            println!();
            println!("{text}");
        }
        None => {
            anyhow::bail!(
                "{}",
                controller.error().unwrap_or(TRANSCRIPTION_FAILED_MESSAGE)
            );
        }
    }

    if save {
        let dir = output_dir.unwrap_or(Path::new("."));
        if let Some(path) = controller.export_result(dir)? {
            ui::success(&format!("Saved {}", path.display()));
        }
    }

    Ok(())
}
