//! Application state and transitions.
//!
//! AppState is the root state type. It owns the query controller, the
//! collection for the active query and the grid view-state. Transitions never
//! perform I/O: anything that needs a page fetched returns a [`FetchRequest`]
//! for the shell to dispatch.

use crate::model::{Book, FetchOutcome, FetchRequest, Generation};
use crate::state::collection::{ApplyResult, IncrementalCollection};
use crate::state::query::{QueryConfig, QueryController, QueryInput};
use crate::view_state::{
    project, should_fetch_more, GridConfig, GridViewState, ViewportDimensions, VisibleWindow,
};
use std::time::Instant;
use tracing::{debug, info};

/// Re-measure passes per refresh. Each pass can only shift rows that were
/// estimated, so a couple of passes settle the window.
const MAX_MEASURE_PASSES: usize = 3;

// ===== Focus =====

/// Which area receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Card grid: navigation keys scroll.
    #[default]
    Grid,
    /// Query box: printable keys edit the query.
    Query,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Transitions
///
/// - Query: edit → (debounce) → commit → new collection + grid reset
/// - Collection: see [`IncrementalCollection`]
/// - Focus: Grid ⇄ Query
#[derive(Debug, Clone)]
pub struct AppState {
    /// Which area has keyboard focus.
    pub focus: Focus,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    query: QueryController,
    collection: IncrementalCollection,
    grid: GridViewState,
}

impl AppState {
    /// Create the initial state and the request for the first page of the
    /// initial query.
    pub fn new(query_config: QueryConfig, grid_config: &GridConfig) -> (Self, FetchRequest) {
        let query = QueryController::new(query_config);
        let (collection, request) =
            IncrementalCollection::start(query.active_query(), Generation::default().next());
        let state = Self {
            focus: Focus::default(),
            help_visible: false,
            query,
            collection,
            grid: GridViewState::new(grid_config),
        };
        (state, request)
    }

    // ===== Query =====

    /// Replace the raw query input. Commits later, through [`tick`](Self::tick).
    pub fn edit_query(&mut self, input: QueryInput, now: Instant) {
        self.query.edit(input, now);
    }

    /// Advance time: commit a settled query edit.
    ///
    /// Returns the first-page request of the new collection when the active
    /// query changed.
    pub fn tick(&mut self, now: Instant) -> Option<FetchRequest> {
        let query = self.query.poll(now)?;
        Some(self.restart(query))
    }

    /// Commit the raw query now, skipping the debounce.
    pub fn commit_query(&mut self) -> Option<FetchRequest> {
        let query = self.query.commit_now()?;
        Some(self.restart(query))
    }

    /// Select quick chip `index`. Out-of-range or already-active chips do nothing.
    pub fn select_quick(&mut self, index: usize) -> Option<FetchRequest> {
        let query = self.query.select_quick(index)?;
        Some(self.restart(query))
    }

    /// Discard the current collection and start a new one for `query`.
    ///
    /// The new generation makes every outcome of the old collection stale.
    fn restart(&mut self, query: String) -> FetchRequest {
        let generation = self.collection.generation().next();
        info!(%generation, query = %query, "Query committed, restarting collection");
        let (collection, request) = IncrementalCollection::start(query, generation);
        self.collection = collection;
        self.grid.reset();
        request
    }

    // ===== Collection =====

    /// Deliver a fetch outcome to the current collection.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> ApplyResult {
        let result = self.collection.apply(outcome);
        if matches!(result, ApplyResult::Appended { .. }) {
            self.grid.sync_items(self.collection.len());
        }
        result
    }

    /// Re-issue a failed request (user action).
    pub fn retry(&mut self) -> Option<FetchRequest> {
        self.collection.retry()
    }

    // ===== Grid =====

    /// Record new terminal dimensions for the grid area.
    pub fn set_viewport(&mut self, viewport: ViewportDimensions) {
        if self.grid.set_viewport(viewport) {
            self.grid.sync_items(self.collection.len());
        }
    }

    /// Recompute the visible window, feeding measured row heights back, then
    /// evaluate the fetch trigger.
    ///
    /// `measure` returns the height of a materialized row of books. Returns
    /// the settled window and the next-page request if one should be issued.
    pub fn refresh_window<F>(&mut self, mut measure: F) -> (VisibleWindow, Option<FetchRequest>)
    where
        F: FnMut(&[Book]) -> usize,
    {
        self.grid.sync_items(self.collection.len());
        let mut window = self.grid.window();

        for _ in 0..MAX_MEASURE_PASSES {
            let rows = project(self.collection.flat_items(), self.grid.columns());
            let mut changed = false;
            for row in &window.rows {
                if let Some(books) = rows.get(row.index) {
                    changed |= self.grid.record_measurement(row.index, measure(books));
                }
            }
            if !changed {
                break;
            }
            window = self.grid.window();
        }

        let request = if should_fetch_more(&window, self.grid.row_count(), &self.collection) {
            debug!(
                last_row = ?window.last_row(),
                rows = self.grid.row_count(),
                "Window reached end of loaded rows"
            );
            self.collection.request_next_page()
        } else {
            None
        };
        (window, request)
    }

    // ===== Accessors =====

    /// Query controller (raw input, chips, active query).
    pub fn query(&self) -> &QueryController {
        &self.query
    }

    /// Collection for the active query.
    pub fn collection(&self) -> &IncrementalCollection {
        &self.collection
    }

    /// Grid view-state.
    pub fn grid(&self) -> &GridViewState {
        &self.grid
    }

    /// Mutable grid view-state (scrolling).
    pub fn grid_mut(&mut self) -> &mut GridViewState {
        &mut self.grid
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
