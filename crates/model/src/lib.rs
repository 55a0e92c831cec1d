//! Core data model for browsing a GitHub repository of KIF game records.
//!
//! Pure types and helpers: repository identity, the current browse path with
//! its breadcrumb trail, directory-entry records as returned by the contents
//! API, and the classification step that turns a raw listing into folders and
//! selectable KIF files. No IO happens in this crate.

pub mod classify;
pub mod encode;
pub mod entry;
pub mod identity;
pub mod path;

pub use classify::{classify, is_kif_name};
pub use entry::{ClassifiedEntry, EntryKind, RawEntry};
pub use identity::Identity;
pub use path::{Crumb, PathState, ROOT_SEGMENT};
