//! Background fetch execution.
//!
//! Each request runs on its own short-lived thread and reports back over a
//! channel the main loop drains without blocking. The collection already
//! guarantees at most one request per query is in flight, so the worker does
//! no scheduling of its own.

use super::fetcher::PageFetcher;
use crate::model::{FetchOutcome, FetchRequest, NetworkError};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error};

/// Runs [`FetchRequest`]s off the UI thread.
pub struct FetchWorker {
    fetcher: Arc<dyn PageFetcher>,
    sender: Sender<FetchOutcome>,
    receiver: Receiver<FetchOutcome>,
    in_flight: usize,
}

impl FetchWorker {
    /// Create a worker around `fetcher`.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            fetcher,
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Start executing `request`. The outcome arrives through [`poll`](Self::poll).
    pub fn dispatch(&mut self, request: FetchRequest) {
        debug!(
            generation = %request.ticket.generation,
            page = %request.page(),
            query = %request.query,
            "Dispatching fetch"
        );
        self.in_flight += 1;

        let fetcher = Arc::clone(&self.fetcher);
        let sender = self.sender.clone();
        let ticket = request.ticket;
        let spawned = thread::Builder::new()
            .name(format!("fetch-{}-p{}", ticket.generation, ticket.page))
            .spawn(move || {
                let result = fetcher.fetch(&request.query, request.page());
                // The receiver is gone only when the app is shutting down.
                let _ = sender.send(FetchOutcome { ticket, result });
            });

        if let Err(e) = spawned {
            error!("Failed to spawn fetch thread: {}", e);
            let _ = self.sender.send(FetchOutcome::failure(
                ticket,
                NetworkError::new(format!("could not start request: {e}")),
            ));
        }
    }

    /// Drain every outcome that has arrived so far. Never blocks.
    pub fn poll(&mut self) -> Vec<FetchOutcome> {
        let outcomes: Vec<_> = self.receiver.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(outcomes.len());
        outcomes
    }

    /// Requests dispatched whose outcome has not been polled yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

impl std::fmt::Debug for FetchWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchWorker")
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}
