//! Core view-state newtypes

/// Number of grid columns. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnCount(usize);

/// Error returned when attempting to create a zero column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("ColumnCount must be >= 1 (got {0})")]
pub struct InvalidColumnCount(pub usize);

impl ColumnCount {
    /// A single-column grid.
    pub const ONE: Self = Self(1);

    /// Smart constructor that validates the count is >= 1.
    pub fn new(columns: usize) -> Result<Self, InvalidColumnCount> {
        if columns == 0 {
            Err(InvalidColumnCount(columns))
        } else {
            Ok(Self(columns))
        }
    }

    /// Get the raw value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Number of rows needed to lay out `items` items.
    pub fn rows_for(&self, items: usize) -> usize {
        items.div_ceil(self.0)
    }
}

impl Default for ColumnCount {
    fn default() -> Self {
        Self::ONE
    }
}

/// Viewport dimensions in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportDimensions {
    /// Width in terminal columns.
    pub width: u16,
    /// Height in terminal rows.
    pub height: u16,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// A zero-sized viewport has not been laid out yet.
    pub fn is_measured(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
