//! Cumulative row heights over a Fenwick tree.
//!
//! The grid asks two questions on every frame: where does row `r` start, and
//! which row covers line `y`. Both are answered in logarithmic time, and a
//! measurement that replaces an estimate only touches `O(log n)` tree nodes.
//!
//! | operation    | cost        |
//! |--------------|-------------|
//! | `set`        | O(log n)    |
//! | `prefix_sum` | O(log n)    |
//! | `row_at`     | O(log² n)   |
//! | `push`       | O(log n) amortized, O(n) when the tree regrows |
//! | `truncate`   | O(n)        |

/// Row heights with fast prefix sums.
///
/// The plain heights are kept next to the tree: a Fenwick node's coverage
/// depends on the tree length, so resizing rebuilds the tree from them.
#[derive(Debug, Clone, Default)]
pub struct HeightIndex {
    /// Fenwick tree (0-indexed, node i covers `[i & (i + 1), i]`).
    tree: Vec<isize>,
    /// Plain height per row.
    heights: Vec<usize>,
}

impl HeightIndex {
    /// Empty index with tree storage for `capacity` rows.
    pub fn new(capacity: usize) -> Self {
        Self {
            tree: vec![0; capacity],
            heights: Vec::with_capacity(capacity),
        }
    }

    /// Height stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> usize {
        self.heights[index]
    }

    /// Replace the height of row `index`, e.g. an estimate with a measurement.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// ```
    /// # use shelfview::view_state::height_index::HeightIndex;
    /// let mut rows = HeightIndex::new(4);
    /// rows.push(7); // estimated
    /// rows.push(7);
    /// rows.set(0, 5); // measured: a card without subjects
    /// assert_eq!(rows.total(), 12);
    /// ```
    pub fn set(&mut self, index: usize, height: usize) {
        assert!(
            index < self.len(),
            "index {} out of bounds (len: {})",
            index,
            self.len()
        );

        let delta = height as isize - self.heights[index] as isize;
        self.heights[index] = height;
        if delta != 0 {
            fenwick::array::update(&mut self.tree, index, delta);
        }
    }

    /// Sum of the heights of rows `0..=index`: the line just below row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn prefix_sum(&self, index: usize) -> usize {
        assert!(
            index < self.len(),
            "index {} out of bounds (len: {})",
            index,
            self.len()
        );

        fenwick::array::prefix_sum(&self.tree, index).max(0) as usize
    }

    /// Row whose span `[top, top + height)` contains line `offset`.
    ///
    /// `None` past the last line. Zero-height rows never match.
    ///
    /// ```
    /// # use shelfview::view_state::height_index::HeightIndex;
    /// let mut rows = HeightIndex::new(4);
    /// rows.push(6); // lines 0..6
    /// rows.push(5); // lines 6..11
    /// assert_eq!(rows.row_at(5), Some(0));
    /// assert_eq!(rows.row_at(6), Some(1));
    /// assert_eq!(rows.row_at(11), None);
    /// ```
    pub fn row_at(&self, offset: usize) -> Option<usize> {
        // First row whose bottom edge lies below `offset`.
        let (mut lo, mut hi) = (0, self.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.prefix_sum(mid) <= offset {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        (lo < self.len()).then_some(lo)
    }

    /// Height of all rows together.
    pub fn total(&self) -> usize {
        match self.len() {
            0 => 0,
            n => self.prefix_sum(n - 1),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// True when no rows are stored.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Append a row. The tree doubles when full.
    pub fn push(&mut self, height: usize) {
        let row = self.heights.len();
        self.heights.push(height);
        if row < self.tree.len() {
            fenwick::array::update(&mut self.tree, row, height as isize);
        } else {
            self.rebuild(self.tree.len().max(1) * 2);
        }
    }

    /// Drops every row at or after `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len() {
            return;
        }
        self.heights.truncate(len);
        self.rebuild(self.tree.len());
    }

    /// Forget every row; tree storage is kept.
    pub fn clear(&mut self) {
        self.heights.clear();
        self.tree.iter_mut().for_each(|node| *node = 0);
    }

    fn rebuild(&mut self, capacity: usize) {
        self.tree.clear();
        self.tree.resize(capacity.max(self.heights.len()), 0);
        for (row, &height) in self.heights.iter().enumerate() {
            fenwick::array::update(&mut self.tree, row, height as isize);
        }
    }
}
