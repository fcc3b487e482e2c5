//! Page request and outcome messages exchanged with the fetch worker.

use super::error::NetworkError;
use super::identifiers::{Generation, PageNumber};
use super::page::Page;

/// Identity of one in-flight page request.
///
/// An outcome is only accepted by the collection that issued the ticket, and
/// only while that ticket is the one it is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    /// Collection instance that issued the request.
    pub generation: Generation,
    /// Page requested.
    pub page: PageNumber,
}

/// A page request to hand to the fetch worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Identity of the request.
    pub ticket: FetchTicket,
    /// Query text to search for.
    pub query: String,
}

impl FetchRequest {
    /// Page to fetch.
    pub fn page(&self) -> PageNumber {
        self.ticket.page
    }
}

/// The eventual result of a [`FetchRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Identity of the request this answers.
    pub ticket: FetchTicket,
    /// Fetched page or failure.
    pub result: Result<Page, NetworkError>,
}

impl FetchOutcome {
    /// Successful outcome.
    pub fn success(ticket: FetchTicket, page: Page) -> Self {
        Self {
            ticket,
            result: Ok(page),
        }
    }

    /// Failed outcome.
    pub fn failure(ticket: FetchTicket, error: NetworkError) -> Self {
        Self {
            ticket,
            result: Err(error),
        }
    }
}
