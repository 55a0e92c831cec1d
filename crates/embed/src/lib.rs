//! Viewer embed URL construction.
//!
//! Builds the GitHub Pages URL of the separate viewer application,
//! parameterized to point at one game-record file. Pure and total: any
//! identity and non-empty file path produce a URL, with no existence check
//! against the actual repository.

use kifshare_model::Identity;
use kifshare_model::encode::component;

/// Builds the GitHub Pages base URL, `https://<user>.github.io/<repo>/`.
///
/// User and repo are inserted raw, per Pages URL conventions — they become a
/// hostname label and a plain path where percent-escapes would be invalid.
/// Callers must ensure they contain only URL-safe characters or accept a
/// malformed URL.
pub fn pages_base_url(identity: &Identity) -> String {
    format!("https://{}.github.io/{}/", identity.user, identity.repo)
}

/// Builds the viewer URL for one record file.
///
/// The `o` (owner), `r` (repo), `p` (file path), and `b` (branch) query
/// values are each percent-encoded as opaque components; the file path is
/// encoded whole, slashes included, so it round-trips through the query
/// string.
pub fn viewer_url(identity: &Identity, file_path: &str) -> String {
    format!(
        "{}viewer/index.html?o={}&r={}&p={}&b={}",
        pages_base_url(identity),
        component(&identity.user),
        component(&identity.repo),
        component(file_path),
        component(&identity.branch),
    )
}
