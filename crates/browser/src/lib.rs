//! Browse session orchestration.
//!
//! Owns the navigation state machine: inbound UI events drive path state,
//! listing fetches, and embed URL generation, and every outcome lands in a
//! render model consumed by whatever presentation layer hosts the session.
//! The HTTP and clipboard collaborators are trait-abstracted so the whole
//! flow is testable with fakes.

pub mod clipboard;
pub mod fetch;
pub mod session;
pub mod types;

pub use clipboard::Clipboard;
pub use fetch::ListingFetcher;
pub use session::BrowserSession;
pub use types::{BrowserEvent, BrowserState, RenderModel};
