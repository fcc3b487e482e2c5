//! Grid view-state: viewport, column count, row heights and scroll offset.
//!
//! Holds only what must survive between frames (measurements and the scroll
//! offset). Rows and the visible window are derived on demand.

use super::columns::ColumnBreakpoints;
use super::row_heights::RowHeights;
use super::types::{ColumnCount, ViewportDimensions};
use super::window::{compute_window, Viewport, VisibleWindow};
use tracing::debug;

/// Layout tunables for the card grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Estimated height of a card row before it is measured.
    pub row_height_estimate: usize,
    /// Blank lines between rows.
    pub row_gap: usize,
    /// Rows of overscan above and below the viewport, in estimated rows.
    pub overscan_rows: usize,
    /// Width → column count table.
    pub breakpoints: ColumnBreakpoints,
}

impl GridConfig {
    /// Overscan margin in lines.
    pub fn overscan_lines(&self) -> usize {
        self.overscan_rows * self.row_height_estimate
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height_estimate: 7,
            row_gap: 1,
            overscan_rows: 5,
            breakpoints: ColumnBreakpoints::default(),
        }
    }
}

/// Mutable grid state owned by the application state.
#[derive(Debug, Clone)]
pub struct GridViewState {
    heights: RowHeights,
    scroll_offset: usize,
    viewport: ViewportDimensions,
    columns: ColumnCount,
    breakpoints: ColumnBreakpoints,
    overscan: usize,
}

impl GridViewState {
    /// Create an unmeasured grid.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            heights: RowHeights::new(config.row_height_estimate, config.row_gap),
            scroll_offset: 0,
            viewport: ViewportDimensions::default(),
            columns: config.breakpoints.base(),
            breakpoints: config.breakpoints.clone(),
            overscan: config.overscan_lines(),
        }
    }

    /// Record new viewport dimensions and re-resolve the column count.
    ///
    /// Returns true if the column count changed.
    pub fn set_viewport(&mut self, viewport: ViewportDimensions) -> bool {
        self.viewport = viewport;
        let columns = self.breakpoints.resolve(viewport.width);
        if columns == self.columns {
            return false;
        }
        debug!(
            from = self.columns.get(),
            to = columns.get(),
            width = viewport.width,
            "Column count changed"
        );
        self.columns = columns;
        true
    }

    /// Align row bookkeeping with the current item count.
    pub fn sync_items(&mut self, item_count: usize) -> bool {
        self.heights.sync(self.columns, item_count)
    }

    /// Forget rows, measurements and scroll position (new collection).
    pub fn reset(&mut self) {
        self.heights.reset();
        self.scroll_offset = 0;
    }

    /// Compute the visible window and clamp the stored scroll offset to it.
    pub fn window(&mut self) -> VisibleWindow {
        let window = compute_window(
            &self.heights,
            Viewport::new(self.viewport.height as usize, self.scroll_offset),
            self.overscan,
        );
        self.scroll_offset = window.scroll_offset;
        window
    }

    /// Record a laid-out row height. Returns true if the layout changed.
    pub fn record_measurement(&mut self, row: usize, height: usize) -> bool {
        self.heights.record(row, height)
    }

    /// Scroll by `delta` lines (negative is up). Clamped on the next window.
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.clamp_scroll();
    }

    /// Jump to the first row.
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Jump past the last row (clamped to the bottom).
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> usize {
        self.heights
            .total()
            .saturating_sub(self.viewport.height as usize)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Current column count.
    pub fn columns(&self) -> ColumnCount {
        self.columns
    }

    /// Current viewport.
    pub fn viewport(&self) -> ViewportDimensions {
        self.viewport
    }

    /// Row height table.
    pub fn heights(&self) -> &RowHeights {
        &self.heights
    }

    /// Number of rows currently laid out.
    pub fn row_count(&self) -> usize {
        self.heights.len()
    }
}
