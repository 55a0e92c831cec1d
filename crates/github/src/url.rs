//! Deterministic contents-API URL construction.

use kifshare_model::Identity;
use kifshare_model::encode::component;

const API_BASE: &str = "https://api.github.com/repos";

/// Builds the contents-API URL for `path` at the identity's branch.
///
/// User, repo, and branch are encoded as opaque components. The path is
/// encoded per-segment and rejoined with literal `/` — a slash inside a
/// single segment name would otherwise corrupt the URL. An empty path
/// appends nothing after `/contents`.
pub fn build_listing_url(identity: &Identity, path: &str) -> String {
    let suffix = if path.is_empty() {
        String::new()
    } else {
        format!("/{}", encode_path(path))
    };
    format!(
        "{API_BASE}/{}/{}/contents{}?ref={}",
        component(&identity.user),
        component(&identity.repo),
        suffix,
        component(&identity.branch),
    )
}

/// Encodes a slash-separated repository path segment by segment.
fn encode_path(path: &str) -> String {
    path.split('/').map(component).collect::<Vec<_>>().join("/")
}
