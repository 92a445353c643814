//! Shared HTTP client.
//!
//! One client per process so connections are pooled across attempts. No
//! request timeout is configured: the transport default stays in place and
//! a slow server simply keeps the attempt in flight.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;

static HTTP_CLIENT: OnceCell<reqwest::Client> = OnceCell::new();

/// Get the process-wide HTTP client, creating it on first use
pub fn get_http_client() -> Result<&'static reqwest::Client> {
    HTTP_CLIENT.get_or_try_init(|| {
        reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")
    })
}
