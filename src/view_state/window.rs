//! Visible window computation and the fetch-more trigger.
//!
//! Both are pure functions of the row heights, the viewport and the paging
//! status, recomputed on every scroll, resize, measurement or data change.
//! Running them redundantly is harmless.

use super::row_heights::RowHeights;

/// Scroll position and height of the grid viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Visible height in lines. Zero until the first layout.
    pub height: usize,
    /// Offset of the first visible line from the top of the grid.
    pub scroll_offset: usize,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(height: usize, scroll_offset: usize) -> Self {
        Self {
            height,
            scroll_offset,
        }
    }
}

/// A materialized row with its vertical placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    /// Row index.
    pub index: usize,
    /// Offset of the row's top from the top of the grid.
    pub top: usize,
    /// Best known height.
    pub height: usize,
}

/// Rows to materialize for the current scroll position.
///
/// # Invariants
/// - `start_row <= end_row`
/// - `rows` covers exactly `start_row..end_row` in order
/// - `scroll_offset <= total_height.saturating_sub(viewport_height)`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibleWindow {
    /// First materialized row (inclusive).
    pub start_row: usize,
    /// Last materialized row (exclusive).
    pub end_row: usize,
    /// Placement of each materialized row.
    pub rows: Vec<VisibleRow>,
    /// Total scrollable height of the grid.
    pub total_height: usize,
    /// Scroll offset after clamping to the scrollable range.
    pub scroll_offset: usize,
    /// Viewport height the window was computed for.
    pub viewport_height: usize,
}

impl VisibleWindow {
    /// Number of materialized rows.
    pub fn len(&self) -> usize {
        self.end_row - self.start_row
    }

    /// True when nothing is materialized.
    pub fn is_empty(&self) -> bool {
        self.start_row == self.end_row
    }

    /// Highest materialized row index.
    pub fn last_row(&self) -> Option<usize> {
        self.end_row.checked_sub(1).filter(|_| !self.is_empty())
    }

    /// Check if a specific row is materialized.
    pub fn contains(&self, row: usize) -> bool {
        (self.start_row..self.end_row).contains(&row)
    }

    /// Largest valid scroll offset for this window's content.
    pub fn max_scroll(&self) -> usize {
        self.total_height.saturating_sub(self.viewport_height)
    }
}

/// Paging status the fetch trigger needs.
pub trait PagingStatus {
    /// Another page may exist.
    fn has_more(&self) -> bool;
    /// A page request is already in flight.
    fn is_fetching(&self) -> bool;
}

/// Compute the rows whose span intersects
/// `[scroll - overscan, scroll + viewport_height + overscan)`.
///
/// The scroll offset is clamped first, so a row count that shrank since the
/// last frame never leaves the view past the end. An unmeasured (zero-height)
/// viewport yields an empty window.
pub fn compute_window(heights: &RowHeights, viewport: Viewport, overscan: usize) -> VisibleWindow {
    let total_height = heights.total();
    let scroll_offset = viewport
        .scroll_offset
        .min(total_height.saturating_sub(viewport.height));

    let empty = VisibleWindow {
        total_height,
        scroll_offset,
        viewport_height: viewport.height,
        ..VisibleWindow::default()
    };

    if viewport.height == 0 || heights.is_empty() {
        return empty;
    }

    let range_start = scroll_offset.saturating_sub(overscan);
    let range_end = scroll_offset
        .saturating_add(viewport.height)
        .saturating_add(overscan);

    let Some(start_row) = heights.row_at(range_start) else {
        return empty;
    };
    let last_row = heights
        .row_at(range_end.saturating_sub(1))
        .unwrap_or(heights.len() - 1);
    let end_row = last_row + 1;

    let rows = (start_row..end_row)
        .map(|index| VisibleRow {
            index,
            top: heights.top(index),
            height: heights.height(index),
        })
        .collect();

    VisibleWindow {
        start_row,
        end_row,
        rows,
        total_height,
        scroll_offset,
        viewport_height: viewport.height,
    }
}

/// Whether the window has reached the last known row and another page should
/// be requested.
///
/// Requires that more data may exist and nothing is in flight. With rows
/// loaded, the window's highest row must be at or past `row_count - 1`.
/// With no rows at all (a page whose docs were all dropped), any measured
/// viewport is already at the end.
pub fn should_fetch_more(window: &VisibleWindow, row_count: usize, paging: &impl PagingStatus) -> bool {
    if !paging.has_more() || paging.is_fetching() {
        return false;
    }
    if row_count == 0 {
        return window.viewport_height > 0;
    }
    window
        .last_row()
        .is_some_and(|last_visible| last_visible + 1 >= row_count)
}
