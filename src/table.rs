//! Reachability rows and tables produced by the tabulated subset-sum DP.
//!
//! A [`ReachRow`] covers partial sums `0..=target` for one prefix of the
//! input; a [`ReachTable`] stacks those rows in input order.

/// One DP row: `reachable[j]` is true iff some subset of the prefix sums to `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachRow {
    reachable: Vec<bool>,
}

impl ReachRow {
    /// Wrap a reachability vector whose length is `target + 1`.
    pub fn new(reachable: Vec<bool>) -> Self {
        Self { reachable }
    }

    /// Reachability of partial sum `sum`, or `None` past the row's end.
    #[inline]
    pub fn get(&self, sum: usize) -> Option<bool> {
        self.reachable.get(sum).copied()
    }

    /// Number of columns (`target + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.reachable.len()
    }

    /// Returns true if the row has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reachable.is_empty()
    }

    /// Every reachable partial sum, in increasing order.
    pub fn reachable_sums(&self) -> impl Iterator<Item = usize> + '_ {
        self.reachable
            .iter()
            .enumerate()
            .filter_map(|(sum, &hit)| hit.then_some(sum))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.reachable
    }
}

/// Full tabulation table, one [`ReachRow`] per input element.
#[derive(Debug, Clone)]
pub struct ReachTable {
    rows: Vec<ReachRow>,
}

impl ReachTable {
    pub fn from_rows(rows: Vec<ReachRow>) -> Self {
        Self { rows }
    }

    /// Cell `(row, sum)`, or `None` when either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, sum: usize) -> Option<bool> {
        self.rows.get(row)?.get(sum)
    }

    pub fn row(&self, row: usize) -> Option<&ReachRow> {
        self.rows.get(row)
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_access_is_checked() {
        let row = ReachRow::new(vec![true, false, true]);
        assert_eq!(row.get(0), Some(true));
        assert_eq!(row.get(1), Some(false));
        assert_eq!(row.get(3), None);
        assert_eq!(row.len(), 3);
        assert!(!row.is_empty());
        assert_eq!(row.reachable_sums().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn table_access_is_checked() {
        let table = ReachTable::from_rows(vec![
            ReachRow::new(vec![true, false]),
            ReachRow::new(vec![true, true]),
        ]);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.get(1, 1), Some(true));
        assert_eq!(table.get(0, 1), Some(false));
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.get(0, 2), None);
        assert_eq!(table.row(1).map(ReachRow::len), Some(2));
    }

    #[test]
    fn empty_table() {
        let table = ReachTable::from_rows(Vec::new());
        assert!(table.is_empty());
        assert!(table.row(0).is_none());
        assert_eq!(table.get(0, 0), None);
    }
}
