//! Repository identity for a browse session.

use serde::{Deserialize, Serialize};

/// Branch used when the user leaves the branch field blank.
pub const DEFAULT_BRANCH: &str = "main";

/// The GitHub repository a session browses: owner, repository name, and
/// branch reference. Immutable for the lifetime of a session; a new submit
/// replaces the whole identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user: String,
    pub repo: String,
    pub branch: String,
}

impl Identity {
    /// Builds an identity from raw form input.
    ///
    /// All three fields are trimmed. Returns `None` when user or repo is
    /// empty after trimming; a blank branch falls back to [`DEFAULT_BRANCH`].
    pub fn from_input(user: &str, repo: &str, branch: &str) -> Option<Self> {
        let user = user.trim();
        let repo = repo.trim();
        let branch = branch.trim();

        if user.is_empty() || repo.is_empty() {
            return None;
        }

        Some(Self {
            user: user.to_string(),
            repo: repo.to_string(),
            branch: if branch.is_empty() {
                DEFAULT_BRANCH.to_string()
            } else {
                branch.to_string()
            },
        })
    }
}
