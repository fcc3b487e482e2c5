//! Row projection: flat item sequence → fixed-width grid rows.
//!
//! Rows are never stored. They are borrowed slices recomputed from
//! `(items, columns)` whenever either changes, so appending items can only
//! change the trailing row or add new rows.

use super::types::ColumnCount;

/// Grid rows over a borrowed item slice.
#[derive(Debug)]
pub struct Rows<'a, T> {
    items: &'a [T],
    columns: ColumnCount,
}

impl<T> Clone for Rows<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Rows<'_, T> {}

/// Project `items` into rows of `columns` items each (the last row may be partial).
pub fn project<T>(items: &[T], columns: ColumnCount) -> Rows<'_, T> {
    Rows { items, columns }
}

impl<'a, T> Rows<'a, T> {
    /// Number of rows: `ceil(items / columns)`.
    pub fn len(&self) -> usize {
        self.columns.rows_for(self.items.len())
    }

    /// True when there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Column count this projection was made with.
    pub fn columns(&self) -> ColumnCount {
        self.columns
    }

    /// Items of row `index`. Callers must not assume a full row.
    pub fn get(&self, index: usize) -> Option<&'a [T]> {
        let start = index.checked_mul(self.columns.get())?;
        if start >= self.items.len() {
            return None;
        }
        let end = (start + self.columns.get()).min(self.items.len());
        Some(&self.items[start..end])
    }

    /// Iterate rows in order.
    pub fn iter(&self) -> std::slice::Chunks<'a, T> {
        self.items.chunks(self.columns.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cols(n: usize) -> ColumnCount {
        ColumnCount::new(n).unwrap()
    }

    #[test]
    fn empty_items_have_no_rows() {
        let items: Vec<u32> = Vec::new();
        let rows = project(&items, cols(4));
        assert_eq!(rows.len(), 0);
        assert!(rows.is_empty());
        assert_eq!(rows.get(0), None);
    }

    #[test]
    fn last_row_may_be_partial() {
        let items: Vec<u32> = (0..10).collect();
        let rows = project(&items, cols(4));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.get(2), Some(&[8, 9][..]));
    }

    #[test]
    fn changing_columns_regroups_items() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(project(&items, cols(4)).get(1), Some(&[4, 5, 6, 7][..]));
        assert_eq!(project(&items, cols(3)).get(1), Some(&[3, 4, 5][..]));
    }

    proptest! {
        #[test]
        fn rows_reassemble_items(n in 0usize..200, c in 1usize..9) {
            let items: Vec<usize> = (0..n).collect();
            let rows = project(&items, cols(c));
            prop_assert_eq!(rows.len(), n.div_ceil(c));
            let flat: Vec<usize> = rows.iter().flatten().copied().collect();
            prop_assert_eq!(flat, items.clone());
            for i in 0..rows.len() {
                prop_assert_eq!(rows.get(i), rows.iter().nth(i));
            }
        }

        #[test]
        fn append_keeps_complete_rows_stable(n in 0usize..100, extra in 0usize..60, c in 1usize..7) {
            let before: Vec<usize> = (0..n).collect();
            let after: Vec<usize> = (0..n + extra).collect();
            let rows_before = project(&before, cols(c));
            let rows_after = project(&after, cols(c));
            for i in 0..rows_before.len().saturating_sub(1) {
                prop_assert_eq!(rows_before.get(i), rows_after.get(i));
            }
        }
    }
}
