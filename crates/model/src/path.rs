//! Current browse path and breadcrumb derivation.

use serde::{Deserialize, Serialize};

/// Fixed base segment every browse path is rooted at.
pub const ROOT_SEGMENT: &str = "kif";

/// One breadcrumb element: the label shown to the user and the full
/// root-relative path navigating to it re-fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crumb {
    pub label: String,
    pub path: String,
}

/// The session's current browse path.
///
/// Invariant: the path is never empty and always starts at [`ROOT_SEGMENT`]
/// after any navigation. Paths are slash-separated and root-relative; no
/// validation against the actual repository tree happens here — an invalid
/// path simply produces an empty or error listing from the contents API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathState {
    path: String,
}

impl Default for PathState {
    fn default() -> Self {
        Self {
            path: ROOT_SEGMENT.to_string(),
        }
    }
}

impl PathState {
    /// Creates a path state positioned at the root segment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current slash-separated path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns to the root segment.
    pub fn reset(&mut self) {
        self.path = ROOT_SEGMENT.to_string();
    }

    /// Moves to `path`, which callers supply as a root-relative descendant
    /// (typically a `path` taken from a listed directory entry or a crumb).
    ///
    /// An empty argument is ignored so the never-empty invariant holds.
    pub fn navigate_to(&mut self, path: &str) {
        if path.is_empty() {
            return;
        }
        self.path = path.to_string();
    }

    /// Derives the breadcrumb trail for the current path.
    ///
    /// The first crumb is always `root` pointing at [`ROOT_SEGMENT`]; the
    /// first real path segment gets no crumb of its own since it is
    /// synonymous with the root. Each later crumb accumulates the segments
    /// up to and including its position.
    pub fn breadcrumb(&self) -> Vec<Crumb> {
        let segments: Vec<&str> = self.path.split('/').filter(|s| !s.is_empty()).collect();

        let mut crumbs = vec![Crumb {
            label: "root".to_string(),
            path: ROOT_SEGMENT.to_string(),
        }];

        let mut accum = ROOT_SEGMENT.to_string();
        for segment in segments.iter().skip(1) {
            accum.push('/');
            accum.push_str(segment);
            crumbs.push(Crumb {
                label: (*segment).to_string(),
                path: accum.clone(),
            });
        }

        crumbs
    }
}
