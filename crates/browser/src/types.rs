//! Public types for the browse session.

use kifshare_model::{ClassifiedEntry, Crumb};
use serde::{Deserialize, Serialize};

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserState {
    /// No identity set (session start, or a submit failed validation).
    Idle,
    /// A listing fetch is in flight.
    Loading,
    /// A listing is displayed.
    Loaded,
    /// The last fetch failed; the listing is cleared.
    Error,
}

/// Inbound UI events, dispatched through [`BrowserSession::handle`].
///
/// [`BrowserSession::handle`]: crate::session::BrowserSession::handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// The user submitted the identity form ("load").
    SubmitIdentity {
        user: String,
        repo: String,
        branch: String,
    },
    /// Root breadcrumb activated.
    NavigateRoot,
    /// A folder entry or breadcrumb activated.
    NavigateInto { path: String },
    /// A selectable file entry activated.
    SelectFile { path: String },
    /// The copy button activated.
    CopyCurrentUrl,
}

/// Everything the presentation layer needs to draw the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    pub breadcrumb: Vec<Crumb>,
    pub entries: Vec<ClassifiedEntry>,
    pub status: String,
    pub embed_url: String,
}
