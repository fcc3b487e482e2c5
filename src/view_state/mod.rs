//! Grid layout and windowing (pure).
//!
//! Maps the flat book list into rows for a responsive column count and
//! decides which rows are materialized for the current scroll position.

pub mod columns;
pub mod grid;
pub mod height_index;
pub mod row_heights;
pub mod rows;
pub mod types;
pub mod window;

pub use columns::{Breakpoint, ColumnBreakpoints};
pub use grid::{GridConfig, GridViewState};
pub use row_heights::RowHeights;
pub use rows::{project, Rows};
pub use types::{ColumnCount, ViewportDimensions};
pub use window::{compute_window, should_fetch_more, PagingStatus, Viewport, VisibleRow, VisibleWindow};
