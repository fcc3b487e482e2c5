//! Incremental, page-based book collection for one active query.
//!
//! A pure state machine: it never performs I/O. Operations that start a fetch
//! return a [`FetchRequest`] for the caller to dispatch, and results come back
//! through [`IncrementalCollection::apply`]. At most one request is in flight
//! at any time, which is what keeps page-append order equal to issue order.
//!
//! ```text
//! Pending ──ok──▶ Ready ──request_next_page──▶ FetchingMore ──ok──▶ Ready
//!    │              │                              │
//!    │              └──(empty page)──▶ Exhausted   └──err──▶ Failed
//!    └──err──▶ Failed ──retry──▶ Pending | FetchingMore
//! ```

use crate::model::{
    Book, FetchOutcome, FetchRequest, FetchTicket, Generation, NetworkError, PageNumber,
};
use crate::view_state::PagingStatus;
use tracing::{debug, info, warn};

/// Paging state of a collection.
///
/// In-flight tickets live inside the variants that have a request
/// outstanding, so "fetching while exhausted" cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionStatus {
    /// No page loaded yet; the first page request is in flight.
    Pending {
        /// Outstanding request.
        ticket: FetchTicket,
    },
    /// At least one page loaded, idle, more may exist.
    Ready,
    /// A further page request is in flight.
    FetchingMore {
        /// Outstanding request.
        ticket: FetchTicket,
    },
    /// A page came back empty; no further requests for this query.
    Exhausted,
    /// The last request failed. Loaded pages are kept.
    Failed {
        /// What went wrong.
        error: NetworkError,
        /// Page that failed (the next cursor).
        page: PageNumber,
    },
}

impl CollectionStatus {
    /// Ticket of the request currently in flight.
    pub fn in_flight(&self) -> Option<FetchTicket> {
        match self {
            CollectionStatus::Pending { ticket } | CollectionStatus::FetchingMore { ticket } => {
                Some(*ticket)
            }
            CollectionStatus::Ready
            | CollectionStatus::Exhausted
            | CollectionStatus::Failed { .. } => None,
        }
    }
}

/// What [`IncrementalCollection::apply`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    /// A non-empty page was appended.
    Appended {
        /// Page appended.
        page: PageNumber,
        /// Books added.
        added: usize,
    },
    /// An empty page arrived; the collection is now exhausted.
    Exhausted,
    /// The request failed; loaded pages are kept.
    Failed,
    /// The outcome belongs to another generation or an abandoned request.
    Stale,
}

/// Summary of one appended page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedPage {
    /// Page number.
    pub number: PageNumber,
    /// Books the page contributed.
    pub len: usize,
    /// Total hit count reported with this page.
    pub num_found: Option<u64>,
}

/// Books accumulated from fetched pages, in fetch order.
#[derive(Debug, Clone)]
pub struct IncrementalCollection {
    query: String,
    generation: Generation,
    pages: Vec<LoadedPage>,
    books: Vec<Book>,
    status: CollectionStatus,
}

impl IncrementalCollection {
    /// Create a collection for `query` and the request for its first page.
    pub fn start(query: impl Into<String>, generation: Generation) -> (Self, FetchRequest) {
        let query = query.into();
        let ticket = FetchTicket {
            generation,
            page: PageNumber::FIRST,
        };
        info!(%generation, query = %query, "Starting collection");

        let request = FetchRequest {
            ticket,
            query: query.clone(),
        };
        let collection = Self {
            query,
            generation,
            pages: Vec::new(),
            books: Vec::new(),
            status: CollectionStatus::Pending { ticket },
        };
        (collection, request)
    }

    /// Request the page at the cursor.
    ///
    /// No-op (returns `None`) while a request is in flight, after exhaustion,
    /// or after a failure (use [`retry`](Self::retry) to recover).
    pub fn request_next_page(&mut self) -> Option<FetchRequest> {
        match self.status {
            CollectionStatus::Ready => {
                let request = self.request_for(self.cursor());
                debug!(generation = %self.generation, page = %request.page(), "Requesting next page");
                self.status = CollectionStatus::FetchingMore {
                    ticket: request.ticket,
                };
                Some(request)
            }
            CollectionStatus::Pending { .. }
            | CollectionStatus::FetchingMore { .. }
            | CollectionStatus::Exhausted
            | CollectionStatus::Failed { .. } => None,
        }
    }

    /// Re-issue the request that failed. `None` unless the collection is `Failed`.
    pub fn retry(&mut self) -> Option<FetchRequest> {
        let CollectionStatus::Failed { page, .. } = &self.status else {
            return None;
        };
        let page = *page;
        let request = self.request_for(page);
        info!(generation = %self.generation, page = %page, "Retrying page");
        self.status = if self.pages.is_empty() {
            CollectionStatus::Pending {
                ticket: request.ticket,
            }
        } else {
            CollectionStatus::FetchingMore {
                ticket: request.ticket,
            }
        };
        Some(request)
    }

    /// Deliver the outcome of a request.
    ///
    /// Outcomes that do not answer the request currently in flight are
    /// discarded, which is how results for a previous query are ignored.
    pub fn apply(&mut self, outcome: FetchOutcome) -> ApplyResult {
        if self.status.in_flight() != Some(outcome.ticket) {
            debug!(
                generation = %self.generation,
                stale = %outcome.ticket.generation,
                page = %outcome.ticket.page,
                "Discarding stale fetch outcome"
            );
            return ApplyResult::Stale;
        }

        let page_number = outcome.ticket.page;
        match outcome.result {
            Ok(page) => {
                debug_assert_eq!(page.number(), page_number, "page answers a different ticket");
                let exhausted = page.is_exhausted();
                let num_found = page.num_found();
                let books = page.into_books();
                let added = books.len();
                self.books.extend(books);
                self.pages.push(LoadedPage {
                    number: page_number,
                    len: added,
                    num_found,
                });

                if exhausted {
                    info!(generation = %self.generation, page = %page_number, "Results exhausted");
                    self.status = CollectionStatus::Exhausted;
                    ApplyResult::Exhausted
                } else {
                    info!(
                        generation = %self.generation,
                        page = %page_number,
                        added,
                        total = self.books.len(),
                        "Page appended"
                    );
                    self.status = CollectionStatus::Ready;
                    ApplyResult::Appended {
                        page: page_number,
                        added,
                    }
                }
            }
            Err(error) => {
                warn!(generation = %self.generation, page = %page_number, "Page fetch failed: {}", error);
                self.status = CollectionStatus::Failed {
                    error,
                    page: page_number,
                };
                ApplyResult::Failed
            }
        }
    }

    fn request_for(&self, page: PageNumber) -> FetchRequest {
        FetchRequest {
            ticket: FetchTicket {
                generation: self.generation,
                page,
            },
            query: self.query.clone(),
        }
    }

    /// Query this collection was created for.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Instance identity.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Current paging state.
    pub fn status(&self) -> &CollectionStatus {
        &self.status
    }

    /// All books of all pages, in fetch order.
    pub fn flat_items(&self) -> &[Book] {
        &self.books
    }

    /// Number of books loaded.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when no books are loaded.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Pages appended so far.
    pub fn pages(&self) -> &[LoadedPage] {
        &self.pages
    }

    /// Next page to request: always `pages().len() + 1`.
    pub fn cursor(&self) -> PageNumber {
        PageNumber::after(self.pages.len())
    }

    /// Total hits reported by the most recent page.
    pub fn num_found(&self) -> Option<u64> {
        self.pages.last().and_then(|page| page.num_found)
    }

    /// The failure currently shown, if any.
    pub fn error(&self) -> Option<&NetworkError> {
        match &self.status {
            CollectionStatus::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The first page failed: nothing to show but the error.
    pub fn is_first_page_error(&self) -> bool {
        self.pages.is_empty() && matches!(self.status, CollectionStatus::Failed { .. })
    }

    /// Still waiting for the first page.
    pub fn is_pending(&self) -> bool {
        matches!(self.status, CollectionStatus::Pending { .. })
    }

    /// A page after the first is in flight.
    pub fn is_fetching_more(&self) -> bool {
        matches!(self.status, CollectionStatus::FetchingMore { .. })
    }
}

impl PagingStatus for IncrementalCollection {
    fn has_more(&self) -> bool {
        !matches!(self.status, CollectionStatus::Exhausted)
    }

    fn is_fetching(&self) -> bool {
        self.status.in_flight().is_some()
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
