//! Debounced query selection.
//!
//! The raw value follows every keystroke. It becomes the committed value once
//! it has been stable for the debounce interval. Callers drive time explicitly
//! through `now` arguments so the controller stays deterministic under test.

use std::time::{Duration, Instant};
use tracing::debug;

/// Default debounce interval.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Query used when the committed value is blank.
pub const DEFAULT_FALLBACK_QUERY: &str = "book";

/// Query active at startup.
pub const DEFAULT_INITIAL_QUERY: &str = "science";

/// Preset terms offered as quick-select chips.
pub const DEFAULT_QUICK_QUERIES: [&str; 5] =
    ["science", "mathematics", "history", "biology", "astronomy"];

/// Text being edited in the query box.
///
/// `cursor` is a char index in `0..=text.chars().count()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    /// Current text.
    pub text: String,
    /// Cursor position in chars.
    pub cursor: usize,
}

impl QueryInput {
    /// Input holding `text` with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }
}

/// Tunables for [`QueryController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Quiet period before a raw edit commits.
    pub debounce: Duration,
    /// Query used when the committed value trims to empty.
    pub fallback: String,
    /// Quick-select chips.
    pub quick_queries: Vec<String>,
    /// Raw and committed value at startup.
    pub initial_query: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            fallback: DEFAULT_FALLBACK_QUERY.to_string(),
            quick_queries: DEFAULT_QUICK_QUERIES.iter().map(|q| q.to_string()).collect(),
            initial_query: DEFAULT_INITIAL_QUERY.to_string(),
        }
    }
}

/// Tracks raw, committed and active query values.
#[derive(Debug, Clone)]
pub struct QueryController {
    input: QueryInput,
    committed: String,
    deadline: Option<Instant>,
    config: QueryConfig,
}

impl QueryController {
    /// Controller whose initial query is already committed.
    pub fn new(config: QueryConfig) -> Self {
        Self {
            input: QueryInput::new(config.initial_query.clone()),
            committed: config.initial_query.clone(),
            deadline: None,
            config,
        }
    }

    /// Replace the raw input.
    ///
    /// A text change restarts the debounce window. Cursor-only moves do not.
    pub fn edit(&mut self, input: QueryInput, now: Instant) {
        if input.text != self.input.text {
            self.deadline = Some(now + self.config.debounce);
        }
        self.input = input;
    }

    /// Commit the raw value if its debounce window has elapsed.
    ///
    /// Returns the new active query only when it differs from the previous one.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if deadline <= now => self.commit(),
            _ => None,
        }
    }

    /// Commit the raw value immediately (Enter).
    pub fn commit_now(&mut self) -> Option<String> {
        self.commit()
    }

    /// Set the raw value to the chip at `index` and commit it.
    ///
    /// Out-of-range indices are ignored.
    pub fn select_quick(&mut self, index: usize) -> Option<String> {
        let term = self.config.quick_queries.get(index)?.clone();
        self.input = QueryInput::new(term);
        self.commit()
    }

    fn commit(&mut self) -> Option<String> {
        self.deadline = None;
        let before = self.active_query().to_string();
        self.committed = self.input.text.clone();
        let after = self.active_query();
        if after == before {
            return None;
        }
        debug!(from = %before, to = %after, "Active query changed");
        Some(after.to_string())
    }

    /// Committed value, or the fallback when it trims to empty.
    pub fn active_query(&self) -> &str {
        if self.committed.trim().is_empty() {
            &self.config.fallback
        } else {
            &self.committed
        }
    }

    /// Raw input being edited.
    pub fn input(&self) -> &QueryInput {
        &self.input
    }

    /// Raw text being edited.
    pub fn raw(&self) -> &str {
        &self.input.text
    }

    /// Last committed value (may be blank).
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Quick-select chips in display order.
    pub fn quick_queries(&self) -> &[String] {
        &self.config.quick_queries
    }

    /// Index of the chip equal to the raw text, for highlighting.
    pub fn selected_quick(&self) -> Option<usize> {
        self.config
            .quick_queries
            .iter()
            .position(|q| *q == self.input.text)
    }

    /// When the pending edit will commit, if one is pending.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
