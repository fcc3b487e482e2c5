//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod book;
pub mod error;
pub mod fetch;
pub mod identifiers;
pub mod key_action;
pub mod page;

// Re-export for convenience
pub use book::{Book, BookDoc};
pub use error::{AppError, NetworkError};
pub use fetch::{FetchOutcome, FetchRequest, FetchTicket};
pub use identifiers::{BookKey, Generation, InvalidBookKey, InvalidPageNumber, PageNumber};
pub use key_action::KeyAction;
pub use page::{Page, SearchResponse};
