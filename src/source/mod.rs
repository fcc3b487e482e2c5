//! Book page sources.
//!
//! - [`PageFetcher`]: the blocking fetch boundary
//! - [`OpenLibraryFetcher`]: HTTP implementation against the Open Library search API
//! - [`FetchWorker`]: runs fetches on background threads for the TUI loop

pub mod fetcher;
pub mod open_library;
pub mod worker;

pub use fetcher::PageFetcher;
pub use open_library::{FetcherConfig, OpenLibraryFetcher};
pub use worker::FetchWorker;
