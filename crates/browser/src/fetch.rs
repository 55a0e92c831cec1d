//! Listing-fetcher collaborator.

use std::future::Future;
use std::pin::Pin;

use kifshare_github::{ContentsClient, ContentsError};
use kifshare_model::{Identity, RawEntry};

/// Abstract listing fetch over the contents API.
///
/// The session talks to `dyn ListingFetcher` so tests can substitute a fake
/// with scripted responses; the production implementation is
/// [`ContentsClient`].
pub trait ListingFetcher: Send + Sync {
    /// Fetches the listing for `path` at the identity's branch. One attempt,
    /// no retries.
    fn fetch_listing<'a>(
        &'a self,
        identity: &'a Identity,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RawEntry>, ContentsError>> + Send + 'a>>;
}

impl ListingFetcher for ContentsClient {
    fn fetch_listing<'a>(
        &'a self,
        identity: &'a Identity,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RawEntry>, ContentsError>> + Send + 'a>> {
        Box::pin(ContentsClient::fetch_listing(self, identity, path))
    }
}
