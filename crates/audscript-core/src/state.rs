//! Transcription form state machine.
//!
//! The four UI fields (selection, in-flight flag, result, error) live in
//! one struct with synchronous transition methods; the async request layer
//! sits above it in the controller. Transitions keep two invariants:
//!
//! - at most one of result/error is ever present
//! - at most one attempt is outstanding, and a response from an abandoned
//!   attempt can never clobber newer state
//!
//! The second holds because every transition that starts or invalidates an
//! attempt bumps a monotonically increasing id, and `resolve` applies an
//! outcome only while its id is still current.

use crate::controller::TranscribeError;
use crate::selection::SelectedFile;

/// Whether a transcription request is currently outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
}

/// Token tying a dispatched request to the attempt that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt(u64);

/// Outcome of asking the state machine to start a new attempt.
#[derive(Debug)]
pub enum Submission {
    /// The attempt may be dispatched; resolve it with the returned token.
    /// Carries a copy of the selection the request should upload.
    Start(Attempt, SelectedFile),
    /// No file is selected; the error banner has been set.
    NoFile,
    /// Another attempt is outstanding; nothing changed.
    Busy,
}

#[derive(Debug, Default)]
pub struct TranscriptionState {
    file: Option<SelectedFile>,
    request: RequestState,
    transcription: Option<String>,
    error: Option<String>,
    attempt: u64,
}

impl TranscriptionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection. Prior result and error are cleared whether or
    /// not a file was present before, and any outstanding attempt is
    /// abandoned: the state returns to Idle and the attempt's eventual
    /// resolution will be discarded.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.file = file;
        self.transcription = None;
        self.error = None;
        self.request = RequestState::Idle;
        self.attempt += 1;
    }

    pub fn clear_file(&mut self) {
        self.select_file(None);
    }

    /// Try to start a new attempt.
    pub fn begin_submit(&mut self) -> Submission {
        if self.request == RequestState::InFlight {
            return Submission::Busy;
        }
        let Some(file) = self.file.clone() else {
            self.transcription = None;
            self.error = Some(TranscribeError::NoFileSelected.user_message().to_string());
            return Submission::NoFile;
        };
        self.transcription = None;
        self.error = None;
        self.request = RequestState::InFlight;
        self.attempt += 1;
        Submission::Start(Attempt(self.attempt), file)
    }

    /// Apply the outcome of a dispatched attempt. Returns false when the
    /// token is stale (the selection changed while the request was
    /// outstanding) and the outcome was discarded.
    pub fn resolve(
        &mut self,
        attempt: Attempt,
        outcome: Result<String, TranscribeError>,
    ) -> bool {
        if attempt.0 != self.attempt {
            return false;
        }
        self.request = RequestState::Idle;
        match outcome {
            Ok(text) => {
                self.transcription = Some(text);
                self.error = None;
            }
            Err(err) => {
                self.transcription = None;
                self.error = Some(err.user_message().to_string());
            }
        }
        true
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn request(&self) -> RequestState {
        self.request
    }

    pub fn is_in_flight(&self) -> bool {
        self.request == RequestState::InFlight
    }

    pub fn transcription(&self) -> Option<&str> {
        self.transcription.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
