//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod collection;
pub mod query;
pub mod query_input_handler;
pub mod scroll_handler;

// Re-export for convenience
pub use app_state::{AppState, Focus};
pub use collection::{ApplyResult, CollectionStatus, IncrementalCollection, LoadedPage};
pub use query::{QueryConfig, QueryController, QueryInput};
pub use scroll_handler::handle_scroll_action;
