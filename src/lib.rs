//! Shelfview
//!
//! Terminal book catalog over the Open Library search API: a debounced query
//! box, quick-select chips and a responsive card grid that loads further
//! pages as the reader scrolls toward the end.
//!
//! Pure Core / Impure Shell: `model`, `state` and `view_state` never perform
//! I/O; `source` fetches pages and `view` owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod tests;
