//! GitHub repo-contents API client.
//!
//! Builds deterministic listing URLs and fetches directory listings for a
//! repository path at a branch reference, mapping the JSON response into
//! typed entry records and surfacing transport/HTTP failures.

pub mod client;
pub mod error;
pub mod url;

pub use client::{ContentsClient, parse_listing};
pub use error::ContentsError;
pub use url::build_listing_url;
