//! audscript — audio transcription from the command line.
//!
//! Terminal rendition of the Audscript upload form: pick an audio file,
//! send it to the transcription service, read the text back, optionally
//! save it as `transcription.txt`.

mod commands;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use audscript_core::{ApiConfig, set_verbose};

#[derive(Parser)]
#[command(name = "audscript", version, about = "Transform audio to text")]
struct Cli {
    /// Print diagnostic output to stderr
    #[arg(long, global = true)]
    verbose: bool,

    /// Transcription service base URL (defaults to $AUDSCRIPT_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe an audio file and print the text
    Transcribe {
        /// Audio file to upload (MP3, WAV, M4A or FLAC)
        file: PathBuf,

        /// Also save the text as transcription.txt
        #[arg(long)]
        save: bool,

        /// Directory the artifact is written into (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    set_verbose(cli.verbose);

    let config = match cli.api_url {
        Some(url) => ApiConfig::new(url),
        None => ApiConfig::from_env()?,
    };

    match cli.command {
        Some(Command::Transcribe {
            file,
            save,
            output_dir,
        }) => commands::transcribe::run(&config, &file, save, output_dir.as_deref()).await,
        None => commands::form::run(&config).await,
    }
}
