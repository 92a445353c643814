//! Interactive transcription form.
//!
//! Mirrors the upload page: pick a file, confirm, transcribe, read the
//! result, optionally save it. Looping re-selects and therefore clears the
//! previous result and error banners.

use std::path::{Path, PathBuf};

use anyhow::Result;

use audscript_core::{ApiConfig, SelectedFile, TranscriptionController, format_size};

use crate::ui;

pub async fn run(config: &ApiConfig) -> Result<()> {
    ui::header("Audscript");
    println!("Transform audio to text.");
    ui::info("Supports MP3, WAV, M4A, FLAC");
    println!();

    let mut controller = TranscriptionController::new(config)?;

    loop {
        let path = ui::input("Audio file", None)?;
        let selected = match SelectedFile::load(Path::new(path.trim())) {
            Ok(file) => file,
            Err(err) => {
                ui::error(&format!("{err:#}"));
                continue;
            }
        };

        if !selected.has_accepted_extension() {
            ui::warn("Not an advertised format (MP3, WAV, M4A, FLAC); sending it anyway");
        }
        println!(
            "  {} ({})",
            selected.filename,
            format_size(selected.size)
        );

        controller.select_file(Some(selected));

        if !ui::confirm("Transcribe this file?", true)? {
            controller.clear_file();
            continue;
        }

        println!("Transcribing...");
        controller.submit().await;

        match controller.transcription() {
            Some(text) => {
                println!();
                ui::success("Transcription result:");
                println!("{text}");
                println!();
                if ui::confirm("Save transcription.txt?", false)? {
                    let dir = ui::input("Directory", Some("."))?;
                    if let Some(path) = controller.export_result(&PathBuf::from(dir))? {
                        ui::success(&format!("Saved {}", path.display()));
                    }
                }
            }
            None => {
                if let Some(message) = controller.error() {
                    ui::error(message);
                }
            }
        }

        println!();
        if !ui::confirm("Transcribe another file?", false)? {
            break;
        }
    }

    Ok(())
}
