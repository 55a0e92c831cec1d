//! Contents API error types.

/// Errors produced while fetching a directory listing.
#[derive(Debug, thiserror::Error)]
pub enum ContentsError {
    /// Non-2xx response; the body is read best-effort for display.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// No usable response reached us at all.
    #[error("network error: {0}")]
    Transport(String),

    /// The endpoint returned a non-array body, which happens when the path
    /// resolves to a single file instead of a directory.
    #[error("path is not a directory")]
    NotADirectory,

    /// The body was not the JSON we expect.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}
