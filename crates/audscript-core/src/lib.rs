pub mod config;
pub mod controller;
pub mod export;
pub mod http;
pub mod provider;
pub mod selection;
pub mod state;
pub mod verbose;

pub use config::{API_URL_ENV, ApiConfig};
pub use controller::{
    NO_FILE_SELECTED_MESSAGE, TRANSCRIPTION_FAILED_MESSAGE, TranscribeError,
    TranscriptionController,
};
pub use export::{EXPORT_FILENAME, export_transcription};
pub use provider::{HttpBackend, TranscriptionBackend, TranscriptionRequest, TranscriptionResult};
pub use selection::{ACCEPTED_EXTENSIONS, SelectedFile, format_size};
pub use state::{RequestState, Submission, TranscriptionState};
pub use verbose::set_verbose;
