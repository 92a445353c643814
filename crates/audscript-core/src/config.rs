//! Transcription service configuration.
//!
//! The base URL is supplied externally through the `AUDSCRIPT_API_URL`
//! environment variable (the CLI may override it per invocation). The
//! `/transcribe` endpoint is derived from the base URL after validation.

use anyhow::Result;

/// Environment variable holding the transcription service base URL
pub const API_URL_ENV: &str = "AUDSCRIPT_API_URL";

/// Path of the transcription endpoint, appended to the base URL
const TRANSCRIBE_PATH: &str = "/transcribe";

/// Resolved transcription service configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from the environment.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Ok(Self::new(url)),
            _ => anyhow::bail!(
                "Transcription service URL not configured.\n\
                 Set the {API_URL_ENV} environment variable, e.g.\n\
                 {API_URL_ENV}=http://localhost:8000"
            ),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full transcription endpoint URL from the base URL
    pub fn endpoint_url(&self) -> Result<String> {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            anyhow::bail!(
                "Transcription service URL is empty.\n\
                 Set it with the {API_URL_ENV} environment variable."
            );
        }

        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            anyhow::bail!(
                "Invalid transcription service URL: must start with http:// or https://\n\
                 Got: {}\n\
                 Example: {API_URL_ENV}=http://localhost:8000",
                trimmed
            );
        }

        // Basic validation: ensure there's a host after the scheme
        let after_scheme = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .unwrap_or("");
        if after_scheme.is_empty() || after_scheme.starts_with('/') {
            anyhow::bail!(
                "Invalid transcription service URL: missing host\n\
                 Got: {}\n\
                 Example: {API_URL_ENV}=http://localhost:8000",
                trimmed
            );
        }

        // Normalize: remove trailing slash, append the endpoint path
        let base = trimmed.trim_end_matches('/');
        Ok(format!("{base}{TRANSCRIBE_PATH}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_appends_path() {
        let config = ApiConfig::new("http://localhost:8000");
        assert_eq!(
            config.endpoint_url().unwrap(),
            "http://localhost:8000/transcribe"
        );
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(
            config.endpoint_url().unwrap(),
            "https://api.example.com/transcribe"
        );
    }

    #[test]
    fn test_endpoint_url_rejects_missing_scheme() {
        let config = ApiConfig::new("localhost:8000");
        assert!(config.endpoint_url().is_err());
    }

    #[test]
    fn test_endpoint_url_rejects_missing_host() {
        assert!(ApiConfig::new("http://").endpoint_url().is_err());
        assert!(ApiConfig::new("https:///transcribe").endpoint_url().is_err());
    }

    #[test]
    fn test_endpoint_url_rejects_empty() {
        assert!(ApiConfig::new("").endpoint_url().is_err());
        assert!(ApiConfig::new("   ").endpoint_url().is_err());
    }
}
