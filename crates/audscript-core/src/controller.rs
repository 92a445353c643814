//! Transcription form controller.
//!
//! Orchestrates the single round-trip from file selection to displayed
//! outcome: precondition checks, one multipart upload per attempt, and
//! mapping of the response onto the state machine. The rendering layer
//! reads the state accessors and invokes the operations; it never touches
//! the request itself.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::ApiConfig;
use crate::export::export_transcription;
use crate::provider::{HttpBackend, TranscriptionBackend, TranscriptionRequest};
use crate::selection::SelectedFile;
use crate::state::{Submission, TranscriptionState};

/// Error banner shown when submitting without a selection
pub const NO_FILE_SELECTED_MESSAGE: &str = "Please upload an audio file first";

/// Error banner shown when an attempt fails for any reason
pub const TRANSCRIPTION_FAILED_MESSAGE: &str =
    "Failed to transcribe the audio. Please try again.";

/// Why a submission did not produce a transcription.
///
/// Every variant collapses to a fixed user-facing banner; the underlying
/// cause stays in the error source for diagnostics only.
#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("no audio file selected")]
    NoFileSelected,
    #[error("transcription request failed")]
    RequestFailed(#[source] anyhow::Error),
}

impl TranscribeError {
    /// The fixed banner text shown for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            TranscribeError::NoFileSelected => NO_FILE_SELECTED_MESSAGE,
            TranscribeError::RequestFailed(_) => TRANSCRIPTION_FAILED_MESSAGE,
        }
    }
}

pub struct TranscriptionController {
    state: TranscriptionState,
    backend: Box<dyn TranscriptionBackend>,
    endpoint: String,
}

impl TranscriptionController {
    /// Controller backed by the shared HTTP client.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Self::with_backend(config, Box::new(HttpBackend))
    }

    /// Controller with an explicit backend (stubs in tests).
    pub fn with_backend(
        config: &ApiConfig,
        backend: Box<dyn TranscriptionBackend>,
    ) -> Result<Self> {
        Ok(Self {
            state: TranscriptionState::new(),
            backend,
            endpoint: config.endpoint_url()?,
        })
    }

    /// Replace the selection (or drop it with `None`). Clears any prior
    /// result or error banner.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.state.select_file(file);
    }

    pub fn clear_file(&mut self) {
        self.state.clear_file();
    }

    /// Run one transcription attempt to completion. All outcomes land in
    /// the state fields; nothing is returned to the caller.
    pub async fn submit(&mut self) {
        let (attempt, file) = match self.state.begin_submit() {
            Submission::Start(attempt, file) => (attempt, file),
            Submission::NoFile => {
                crate::verbose!("submit rejected: no file selected");
                return;
            }
            Submission::Busy => {
                crate::verbose!("submit ignored: a request is already in flight");
                return;
            }
        };

        crate::verbose!(
            "uploading {} ({} bytes) to {}",
            file.filename,
            file.size,
            self.endpoint
        );

        let request = TranscriptionRequest {
            mime_type: file.mime_type(),
            filename: file.filename,
            audio_data: file.data,
        };

        let outcome = match self.backend.transcribe(&self.endpoint, request).await {
            Ok(result) => Ok(result.text),
            Err(err) => {
                crate::verbose!("transcription request failed: {err:#}");
                Err(TranscribeError::RequestFailed(err))
            }
        };

        if !self.state.resolve(attempt, outcome) {
            crate::verbose!("discarded response from an abandoned attempt");
        }
    }

    /// Write the last result to `transcription.txt` under `dir`. Returns
    /// the artifact path, or `None` when there is no result to export.
    pub fn export_result(&self, dir: &Path) -> Result<Option<PathBuf>> {
        match self.state.transcription() {
            Some(text) => export_transcription(text, dir).map(Some),
            None => Ok(None),
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.state.file()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.is_in_flight()
    }

    pub fn transcription(&self) -> Option<&str> {
        self.state.transcription()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::TranscriptionResult;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Copy)]
    enum StubOutcome {
        Text(&'static str),
        Fail,
    }

    struct StubBackend {
        outcome: StubOutcome,
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<TranscriptionRequest>>>,
    }

    #[async_trait]
    impl TranscriptionBackend for StubBackend {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn transcribe(
            &self,
            _endpoint: &str,
            request: TranscriptionRequest,
        ) -> Result<TranscriptionResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request);
            match self.outcome {
                StubOutcome::Text(text) => Ok(TranscriptionResult { text: text.into() }),
                StubOutcome::Fail => Err(anyhow!("Server responded with 500 Internal Server Error")),
            }
        }
    }

    fn controller_with_stub(
        outcome: StubOutcome,
    ) -> (
        TranscriptionController,
        Arc<AtomicUsize>,
        Arc<Mutex<Vec<TranscriptionRequest>>>,
    ) {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let backend = StubBackend {
            outcome,
            calls: calls.clone(),
            seen: seen.clone(),
        };
        let config = ApiConfig::new("http://localhost:8000");
        let controller = TranscriptionController::with_backend(&config, Box::new(backend)).unwrap();
        (controller, calls, seen)
    }

    fn sample_file() -> SelectedFile {
        SelectedFile::from_bytes("call.mp3", vec![0xFF, 0xFB, 0x90])
    }

    #[tokio::test]
    async fn test_submit_without_file_never_calls_backend() {
        let (mut controller, calls, _) = controller_with_stub(StubOutcome::Text("hi"));
        controller.submit().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.error(), Some(NO_FILE_SELECTED_MESSAGE));
        assert!(controller.transcription().is_none());
        assert!(!controller.is_in_flight());
    }

    #[tokio::test]
    async fn test_submit_uploads_selected_file_once() {
        let (mut controller, calls, seen) = controller_with_stub(StubOutcome::Text("hi"));
        controller.select_file(Some(sample_file()));
        controller.submit().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].filename, "call.mp3");
        assert_eq!(seen[0].audio_data, vec![0xFF, 0xFB, 0x90]);
        assert_eq!(seen[0].mime_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn test_successful_submit_sets_result() {
        let (mut controller, _, _) = controller_with_stub(StubOutcome::Text("hello world"));
        controller.select_file(Some(sample_file()));
        controller.submit().await;

        assert_eq!(controller.transcription(), Some("hello world"));
        assert!(controller.error().is_none());
        assert!(!controller.is_in_flight());
    }

    #[tokio::test]
    async fn test_failed_submit_sets_fixed_banner() {
        let (mut controller, _, _) = controller_with_stub(StubOutcome::Fail);
        controller.select_file(Some(sample_file()));
        controller.submit().await;

        assert_eq!(controller.error(), Some(TRANSCRIPTION_FAILED_MESSAGE));
        assert!(controller.transcription().is_none());
        assert!(!controller.is_in_flight());
    }

    #[tokio::test]
    async fn test_reselect_after_failure_clears_banner() {
        let (mut controller, _, _) = controller_with_stub(StubOutcome::Fail);
        controller.select_file(Some(sample_file()));
        controller.submit().await;
        assert!(controller.error().is_some());

        controller.select_file(Some(sample_file()));
        assert!(controller.error().is_none());
        assert!(controller.transcription().is_none());
    }

    #[tokio::test]
    async fn test_controller_usable_after_failure() {
        let (mut controller, calls, _) = controller_with_stub(StubOutcome::Fail);
        controller.select_file(Some(sample_file()));
        controller.submit().await;
        controller.select_file(Some(sample_file()));
        controller.submit().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_export_writes_artifact() {
        let (mut controller, _, _) = controller_with_stub(StubOutcome::Text("abc"));
        controller.select_file(Some(sample_file()));
        controller.submit().await;

        let dir = tempfile::tempdir().unwrap();
        let path = controller.export_result(dir.path()).unwrap().unwrap();
        assert_eq!(path.file_name().unwrap(), "transcription.txt");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_export_without_result_is_a_no_op() {
        let (controller, _, _) = controller_with_stub(StubOutcome::Text("abc"));
        let dir = tempfile::tempdir().unwrap();
        assert!(controller.export_result(dir.path()).unwrap().is_none());
        assert!(!dir.path().join("transcription.txt").exists());
    }

    #[test]
    fn test_rejects_endpoint_without_scheme() {
        let config = ApiConfig::new("localhost:8000");
        assert!(TranscriptionController::new(&config).is_err());
    }
}
