//! Per-row height estimates and measurements.
//!
//! Every row starts at the configured estimate. Once a row has been laid out
//! its measured height replaces the estimate. Heights are stored as slots
//! (`height + gap`) in a [`HeightIndex`] so row tops are plain prefix sums.

use super::height_index::HeightIndex;
use super::types::ColumnCount;
use tracing::debug;

/// Height-estimation capability consumed by the window computation.
#[derive(Debug, Clone)]
pub struct RowHeights {
    estimate: usize,
    gap: usize,
    slots: HeightIndex,
    measured: Vec<bool>,
    columns: Option<ColumnCount>,
    item_count: usize,
}

impl RowHeights {
    /// Create an empty height table. `estimate` is clamped to at least 1.
    pub fn new(estimate: usize, gap: usize) -> Self {
        Self {
            estimate: estimate.max(1),
            gap,
            slots: HeightIndex::new(64),
            measured: Vec::new(),
            columns: None,
            item_count: 0,
        }
    }

    /// Initial estimate for unmeasured rows.
    pub fn estimate(&self) -> usize {
        self.estimate
    }

    /// Vertical gap between consecutive rows.
    pub fn gap(&self) -> usize {
        self.gap
    }

    /// Number of rows tracked.
    pub fn len(&self) -> usize {
        self.measured.len()
    }

    /// True when no rows are tracked.
    pub fn is_empty(&self) -> bool {
        self.measured.is_empty()
    }

    /// Forget every row and measurement.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.measured.clear();
        self.columns = None;
        self.item_count = 0;
    }

    /// Bring the table in line with the current item count and column count.
    ///
    /// - A different column count invalidates every measurement.
    /// - A shrinking item count means a different collection: start over.
    /// - Appended items re-estimate the previously trailing row (it may have
    ///   gained items) and add estimated rows.
    ///
    /// Returns true if anything changed.
    pub fn sync(&mut self, columns: ColumnCount, item_count: usize) -> bool {
        if self.columns == Some(columns) && self.item_count == item_count {
            return false;
        }

        if self.columns != Some(columns) || item_count < self.item_count {
            debug!(
                columns = columns.get(),
                item_count, "Row heights invalidated"
            );
            self.slots.clear();
            self.measured.clear();
        } else if self.item_count % columns.get() != 0 {
            if let Some(last) = self.measured.len().checked_sub(1) {
                self.slots.set(last, self.estimate + self.gap);
                self.measured[last] = false;
            }
        }

        let rows = columns.rows_for(item_count);
        if rows < self.measured.len() {
            self.slots.truncate(rows);
            self.measured.truncate(rows);
        }
        while self.measured.len() < rows {
            self.slots.push(self.estimate + self.gap);
            self.measured.push(false);
        }

        self.columns = Some(columns);
        self.item_count = item_count;
        true
    }

    /// Record the laid-out height of `row`.
    ///
    /// Returns true when the stored height changed (the window must be recomputed).
    pub fn record(&mut self, row: usize, height: usize) -> bool {
        if row >= self.len() {
            return false;
        }
        let height = height.max(1);
        let changed = self.height(row) != height;
        self.slots.set(row, height + self.gap);
        self.measured[row] = true;
        changed
    }

    /// Whether `row` has a measured height.
    pub fn is_measured(&self, row: usize) -> bool {
        self.measured.get(row).copied().unwrap_or(false)
    }

    /// Best known height of `row` (measured, else estimate).
    pub fn height(&self, row: usize) -> usize {
        if row < self.len() {
            self.slots.get(row) - self.gap
        } else {
            self.estimate
        }
    }

    /// Vertical offset of the top of `row`.
    pub fn top(&self, row: usize) -> usize {
        match row.min(self.len()) {
            0 => 0,
            r => self.slots.prefix_sum(r - 1),
        }
    }

    /// Total scrollable height: all row heights plus `gap * (rows - 1)`.
    pub fn total(&self) -> usize {
        self.slots.total().saturating_sub(self.gap)
    }

    /// Row whose slot (row plus trailing gap) contains `offset`.
    pub fn row_at(&self, offset: usize) -> Option<usize> {
        self.slots.row_at(offset)
    }
}
