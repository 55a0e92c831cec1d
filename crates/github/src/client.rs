//! Async contents-API client over an injected `reqwest::Client`.

use kifshare_model::{Identity, RawEntry};
use tracing::debug;

use crate::error::ContentsError;
use crate::url::build_listing_url;

/// GitHub JSON content-negotiation media type.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Fetches directory listings from the GitHub contents API.
///
/// One attempt per call, no retries; the caller decides whether the user
/// gets to trigger another attempt.
pub struct ContentsClient {
    http: reqwest::Client,
}

impl ContentsClient {
    /// Creates a client on top of the given HTTP client.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetches the listing for `path` at the identity's branch.
    pub async fn fetch_listing(
        &self,
        identity: &Identity,
        path: &str,
    ) -> Result<Vec<RawEntry>, ContentsError> {
        let url = build_listing_url(identity, path);
        debug!(%url, "fetching contents listing");

        let resp = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, GITHUB_JSON)
            .send()
            .await
            .map_err(|e| ContentsError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            // Best-effort body read for display; empty when unreadable.
            let body = resp.text().await.unwrap_or_default();
            return Err(ContentsError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ContentsError::Transport(e.to_string()))?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        parse_listing(value)
    }
}

/// Maps a contents-API response body into entry records.
///
/// A non-array body means the path resolved to a single file, not a
/// directory.
pub fn parse_listing(value: serde_json::Value) -> Result<Vec<RawEntry>, ContentsError> {
    if !value.is_array() {
        return Err(ContentsError::NotADirectory);
    }
    Ok(serde_json::from_value(value)?)
}
