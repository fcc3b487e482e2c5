//! Responsive column count from viewport width.

use super::types::ColumnCount;

/// A width threshold at and above which the grid uses `columns` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// Minimum viewport width (inclusive).
    pub min_width: u16,
    /// Column count once the width is reached.
    pub columns: ColumnCount,
}

/// Ordered breakpoint table.
///
/// # Invariants
/// - `steps` is sorted by ascending `min_width`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBreakpoints {
    base: ColumnCount,
    steps: Vec<Breakpoint>,
}

impl ColumnBreakpoints {
    /// Build a table; steps are sorted by width and duplicate widths keep the last entry.
    pub fn new(base: ColumnCount, mut steps: Vec<Breakpoint>) -> Self {
        steps.sort_by_key(|step| step.min_width);
        steps.reverse();
        steps.dedup_by_key(|step| step.min_width);
        steps.reverse();
        Self { base, steps }
    }

    /// The pixel table from the web layout this grid mirrors:
    /// 2 columns, 3 from 768px, 4 from 1024px.
    pub fn web() -> Self {
        Self::new(
            column_count(2),
            vec![
                Breakpoint {
                    min_width: 768,
                    columns: column_count(3),
                },
                Breakpoint {
                    min_width: 1024,
                    columns: column_count(4),
                },
            ],
        )
    }

    /// Column count used below every breakpoint.
    pub fn base(&self) -> ColumnCount {
        self.base
    }

    /// Breakpoints in ascending width order.
    pub fn steps(&self) -> &[Breakpoint] {
        &self.steps
    }

    /// Column count for the largest breakpoint `width` meets or exceeds.
    pub fn resolve(&self, width: u16) -> ColumnCount {
        self.steps
            .iter()
            .take_while(|step| width >= step.min_width)
            .last()
            .map_or(self.base, |step| step.columns)
    }
}

impl Default for ColumnBreakpoints {
    /// Terminal-cell table: 1 column, then one more per 40 cells from 60.
    fn default() -> Self {
        Self::new(
            ColumnCount::ONE,
            [(60, 2), (100, 3), (140, 4), (180, 5)]
                .into_iter()
                .map(|(min_width, columns)| Breakpoint {
                    min_width,
                    columns: column_count(columns),
                })
                .collect(),
        )
    }
}

fn column_count(n: usize) -> ColumnCount {
    ColumnCount::new(n).unwrap_or(ColumnCount::ONE)
}
