//! Directory-entry records for repository listings.

use serde::{Deserialize, Serialize};

/// Kind of a listed repository item.
///
/// The contents API can also report `symlink` and `submodule`; those decode
/// as [`EntryKind::Other`] and are dropped during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
    #[serde(other)]
    Other,
}

/// One item of a contents-API directory listing, as decoded from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Entry name (not full path).
    pub name: String,
    /// Root-relative repository path.
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// A listing entry after classification, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// True only for files whose name passes the KIF suffix test.
    pub selectable: bool,
}
