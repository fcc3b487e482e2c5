//! The page-fetch boundary.

use crate::model::{NetworkError, Page, PageNumber};

/// Fetches one page of search results.
///
/// Implementations block until the page arrives or fails; the
/// [`FetchWorker`](super::FetchWorker) keeps them off the UI thread.
pub trait PageFetcher: Send + Sync {
    /// Fetch page `page` (1-based) of the results for `query`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure, as a uniform [`NetworkError`].
    fn fetch(&self, query: &str, page: PageNumber) -> Result<Page, NetworkError>;
}
