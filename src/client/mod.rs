//! HTTP access to the module index feed.
//!
//! One blocking GET per run. A failed request or an error status is fatal
//! before any parsing starts; there are no retries. The returned body
//! implements `Read`, so the stream reader consumes it line by line without
//! buffering the whole feed, and dropping it closes the connection on every
//! exit path.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};

/// Fetch the index feed, returning the response body as a byte stream.
///
/// The timeout bounds the whole request including the body read, so a
/// stalled feed cannot hang the run indefinitely.
pub fn fetch_index(url: &str, timeout: Duration) -> Result<Response> {
    let client =
        Client::builder().timeout(timeout).build().context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Request to module index failed: {url}"))?;

    response
        .error_for_status()
        .with_context(|| format!("Module index returned an error status: {url}"))
}
