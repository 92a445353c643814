//! Transcription backend seam and its HTTP implementation.
//!
//! The production backend posts the audio as a multipart form to the
//! configured `/transcribe` endpoint and extracts the `transcription`
//! field from the JSON response; everything else in the body is ignored.
//! Tests substitute the trait with stubs.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::http::get_http_client;

/// Multipart field name the service expects the audio under
const FILE_FIELD: &str = "file";

/// One outbound transcription attempt: the audio bytes plus the metadata
/// carried by the multipart part.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio_data: Vec<u8>,
    pub filename: String,
    pub mime_type: &'static str,
}

/// Text returned by the transcription service
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionResult {
    pub text: String,
}

/// Success response structure of the transcription service
#[derive(Deserialize)]
struct TranscribeResponse {
    transcription: String,
}

/// Seam over the outbound transcription call.
#[async_trait]
pub trait TranscriptionBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Upload the audio and return the transcription text.
    async fn transcribe(
        &self,
        endpoint: &str,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionResult>;
}

/// HTTP transcription backend
#[derive(Debug, Default, Clone)]
pub struct HttpBackend;

#[async_trait]
impl TranscriptionBackend for HttpBackend {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn transcribe(
        &self,
        endpoint: &str,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionResult> {
        let client = get_http_client()?;

        let form = reqwest::multipart::Form::new().part(
            FILE_FIELD,
            reqwest::multipart::Part::bytes(request.audio_data)
                .file_name(request.filename)
                .mime_str(request.mime_type)?,
        );

        let response = client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .context("Failed to send request")?;

        // Failure statuses are not inspected further; the status alone is
        // what the diagnostics carry.
        if !response.status().is_success() {
            anyhow::bail!("Server responded with {}", response.status());
        }

        let text = response
            .text()
            .await
            .context("Failed to get response text")?;
        let resp: TranscribeResponse =
            serde_json::from_str(&text).context("Failed to parse server response")?;

        Ok(TranscriptionResult {
            text: resp.transcription,
        })
    }
}
