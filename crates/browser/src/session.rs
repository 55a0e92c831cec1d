//! The browse session state machine.

use kifshare_embed::viewer_url;
use kifshare_github::ContentsError;
use kifshare_model::{ClassifiedEntry, Identity, PathState, RawEntry, classify};
use tracing::{debug, warn};

use crate::clipboard::Clipboard;
use crate::fetch::ListingFetcher;
use crate::types::{BrowserEvent, BrowserState, RenderModel};

const STATUS_LOADING: &str = "loading";
const STATUS_OK: &str = "ok";
const STATUS_MISSING_FIELDS: &str = "missing required fields";
const STATUS_EMBED_GENERATED: &str = "embed url generated";
const STATUS_COPIED: &str = "copied";
const STATUS_COPY_FAILED: &str = "copy failed";
const STATUS_NO_EMBED_URL: &str = "no embed url to copy";

/// A fetch issued by [`BrowserSession::begin_load`].
///
/// Carries the sequence number that decides whether the eventual result is
/// still the latest one, plus a snapshot of what to fetch.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    pub seq: u64,
    pub identity: Identity,
    pub path: String,
}

/// One browse session: identity, current path, last listing, last selection.
///
/// Owns all mutable state; pure helpers (path state, classification, URL
/// builders) are driven from here and collaborators (fetcher, clipboard) are
/// injected per call. Every error is converted to a status string at this
/// boundary and the session stays usable — retry is a user re-click.
pub struct BrowserSession {
    identity: Option<Identity>,
    path: PathState,
    entries: Vec<ClassifiedEntry>,
    embed_url: String,
    status: String,
    state: BrowserState,
    /// Sequence number of the most recently issued fetch. Only the matching
    /// result is applied; older in-flight responses are discarded.
    latest_seq: u64,
}

impl Default for BrowserSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserSession {
    /// Creates an idle session positioned at the root path.
    pub fn new() -> Self {
        Self {
            identity: None,
            path: PathState::new(),
            entries: Vec::new(),
            embed_url: String::new(),
            status: String::new(),
            state: BrowserState::Idle,
            latest_seq: 0,
        }
    }

    /// Current session state.
    pub fn state(&self) -> BrowserState {
        self.state
    }

    /// Current browse path.
    pub fn path(&self) -> &str {
        self.path.path()
    }

    /// The last generated embed URL, empty until a selection happens.
    pub fn embed_url(&self) -> &str {
        &self.embed_url
    }

    /// Snapshot for the presentation layer.
    pub fn render(&self) -> RenderModel {
        RenderModel {
            breadcrumb: self.path.breadcrumb(),
            entries: self.entries.clone(),
            status: self.status.clone(),
            embed_url: self.embed_url.clone(),
        }
    }

    /// Dispatches one inbound UI event to its transition.
    pub async fn handle(
        &mut self,
        event: BrowserEvent,
        fetcher: &dyn ListingFetcher,
        clipboard: &mut dyn Clipboard,
    ) {
        match event {
            BrowserEvent::SubmitIdentity { user, repo, branch } => {
                if self.submit_identity(&user, &repo, &branch) {
                    self.load(fetcher).await;
                }
            }
            BrowserEvent::NavigateRoot => {
                self.path.reset();
                self.load(fetcher).await;
            }
            BrowserEvent::NavigateInto { path } => {
                self.path.navigate_to(&path);
                self.load(fetcher).await;
            }
            BrowserEvent::SelectFile { path } => self.select_file(&path),
            BrowserEvent::CopyCurrentUrl => self.copy_current_url(clipboard),
        }
    }

    /// Applies a "load" submission: trims and validates the identity form.
    ///
    /// The prior session is discarded either way — path back to root,
    /// listing and embed URL cleared. Returns whether a fetch should follow;
    /// on validation failure the session short-circuits into `Idle` with
    /// a "missing required fields" status.
    pub fn submit_identity(&mut self, user: &str, repo: &str, branch: &str) -> bool {
        self.path.reset();
        self.entries.clear();
        self.embed_url.clear();

        match Identity::from_input(user, repo, branch) {
            Some(identity) => {
                debug!(user = %identity.user, repo = %identity.repo, branch = %identity.branch, "identity submitted");
                self.identity = Some(identity);
                true
            }
            None => {
                self.identity = None;
                self.state = BrowserState::Idle;
                self.status = STATUS_MISSING_FIELDS.to_string();
                false
            }
        }
    }

    /// Starts a listing fetch for the current path.
    ///
    /// Enters `Loading` and issues a new sequence number; returns `None`
    /// when no identity is set. The caller performs the fetch and hands the
    /// outcome to [`apply_listing`](Self::apply_listing).
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        let identity = self.identity.clone()?;
        self.latest_seq += 1;
        self.state = BrowserState::Loading;
        self.status = STATUS_LOADING.to_string();
        Some(LoadTicket {
            seq: self.latest_seq,
            identity,
            path: self.path.path().to_string(),
        })
    }

    /// Applies a fetch outcome, unless a newer fetch has been issued since.
    ///
    /// Returns whether the result was applied. On success the listing is
    /// classified and displayed; on error the listing is cleared and the
    /// error becomes the status. The embed URL is untouched either way.
    pub fn apply_listing(
        &mut self,
        seq: u64,
        result: Result<Vec<RawEntry>, ContentsError>,
    ) -> bool {
        if seq != self.latest_seq {
            warn!(seq, latest = self.latest_seq, "discarding stale listing result");
            return false;
        }

        match result {
            Ok(items) => {
                self.entries = classify(items);
                self.state = BrowserState::Loaded;
                self.status = STATUS_OK.to_string();
            }
            Err(e) => {
                debug!(error = %e, path = %self.path.path(), "listing fetch failed");
                self.entries.clear();
                self.state = BrowserState::Error;
                self.status = format!("error: {e}");
            }
        }
        true
    }

    /// Fetches and applies the listing for the current path.
    pub async fn load(&mut self, fetcher: &dyn ListingFetcher) {
        let Some(ticket) = self.begin_load() else {
            return;
        };
        let result = fetcher.fetch_listing(&ticket.identity, &ticket.path).await;
        self.apply_listing(ticket.seq, result);
    }

    /// Generates the embed URL for a listed selectable file.
    ///
    /// A side effect available only in `Loaded`: the path must match a
    /// currently listed entry with `selectable == true`, mirroring the fact
    /// that the UI only offers buttons for rendered KIF rows. Navigation
    /// state is untouched.
    pub fn select_file(&mut self, path: &str) {
        if self.state != BrowserState::Loaded {
            return;
        }
        let Some(identity) = &self.identity else {
            return;
        };
        let listed = self
            .entries
            .iter()
            .any(|e| e.selectable && e.path == path);
        if !listed {
            return;
        }

        self.embed_url = viewer_url(identity, path);
        self.status = STATUS_EMBED_GENERATED.to_string();
        debug!(%path, "embed url generated");
    }

    /// Copies the current embed URL via the clipboard collaborator.
    ///
    /// Tries the primary write, then the select-and-copy fallback. Failures
    /// are isolated: they never clear the embed URL or the listing.
    pub fn copy_current_url(&mut self, clipboard: &mut dyn Clipboard) {
        if self.embed_url.is_empty() {
            self.status = STATUS_NO_EMBED_URL.to_string();
            return;
        }

        let copied =
            clipboard.write(&self.embed_url) || clipboard.write_fallback(&self.embed_url);
        self.status = if copied {
            STATUS_COPIED.to_string()
        } else {
            STATUS_COPY_FAILED.to_string()
        };
    }
}
