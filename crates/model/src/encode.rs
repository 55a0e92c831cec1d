//! Percent-encoding contracts for the two URL families this system builds.
//!
//! API URLs (contents endpoint, viewer query string) encode every component
//! through [`component`]. GitHub Pages base URLs are deliberately NOT
//! encoded — the user/repo land in a hostname and a plain path where
//! percent-escapes would be wrong — so the Pages builder takes them raw and
//! there is intentionally no encoder for that case here.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left intact by `encodeURIComponent`: alphanumerics plus
/// `- _ . ! ~ * ' ( )`. Everything else is percent-escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes one opaque URL component (a path segment or query value).
///
/// Slashes are escaped too; callers embedding a multi-segment path encode
/// each segment separately and rejoin with literal `/`.
pub fn component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}
