//! Subset-sum decision problem with three interchangeable strategies.
//!
//! Given a non-empty sequence of non-negative integers and a target, decide
//! whether some subset sums exactly to the target. The empty subset counts
//! only for `target == 0`.
//!
//! Strategies:
//! - [`recursive`]: explore the full pick/skip tree, O(2^n).
//! - [`memoized`]: the same recursion with an (index, remaining target) cache,
//!   O(n·target) time and space.
//! - [`tabulated`]: fill an `n × (target + 1)` reachability table bottom-up
//!   through the [`TableEngine`], O(n·target) with no recursion.
//!
//! All three agree on every input. A target above the total sum is simply
//! unreachable.
//!
//! The recursive strategies walk the input forward from index 0; the last
//! element is the base case.

use crate::config::DEFAULT_MAX_TABLE_CELLS;
use crate::engine::{RowRetention, TableEngine};
use crate::error::{LabError, Result};
use crate::table::{ReachRow, ReachTable};
use crate::traits::LayeredProblem;
use crate::utils::check_table_budget;

/// Tabulated subset-sum instance.
///
/// Row `i` of the table answers "which sums `0..=target` are reachable using
/// only `set[0..=i]`".
#[derive(Clone, Debug)]
pub struct SubsetSumProblem<'a> {
    set: &'a [usize],
    target: usize,
}

impl<'a> SubsetSumProblem<'a> {
    /// Instance checked against [`DEFAULT_MAX_TABLE_CELLS`].
    ///
    /// Returns [`LabError::EmptySet`] when `set` is empty and
    /// [`LabError::TableTooLarge`] when `set.len() × (target + 1)` exceeds the
    /// budget or overflows.
    pub fn new(set: &'a [usize], target: usize) -> Result<Self> {
        Self::new_within(set, target, DEFAULT_MAX_TABLE_CELLS)
    }

    /// Instance checked against an explicit cell budget.
    pub fn new_within(set: &'a [usize], target: usize, max_table_cells: usize) -> Result<Self> {
        if set.is_empty() {
            return Err(LabError::EmptySet);
        }
        check_table_budget(set.len(), target, max_table_cells)?;
        Ok(Self { set, target })
    }

    pub fn set(&self) -> &'a [usize] {
        self.set
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Fill every row and keep them for backtracking.
    pub fn table(&self) -> ReachTable {
        let engine = TableEngine::with_retention(self.clone(), RowRetention::Full);
        let (_, rows) = engine.run();
        ReachTable::from_rows(rows)
    }

    /// Ascending indices of a subset summing to the target, if one exists.
    pub fn witness(&self) -> Option<Vec<usize>> {
        backtrack(self.set(), &self.table(), self.target())
    }
}

impl LayeredProblem for SubsetSumProblem<'_> {
    type Row = ReachRow;
    type Answer = bool;

    fn num_layers(&self) -> usize {
        self.set.len()
    }

    fn init_row(&self) -> Self::Row {
        // Column 0 is the empty subset; the only other hit is set[0] itself.
        let mut reachable = vec![false; self.target + 1];
        reachable[0] = true;
        if let Some(cell) = self.set.first().and_then(|&v| reachable.get_mut(v)) {
            *cell = true;
        }
        ReachRow::new(reachable)
    }

    fn forward_step(&self, layer: usize, prev: &Self::Row) -> Self::Row {
        let value = self.set[layer];
        let prev = prev.as_slice();
        let reachable = (0..=self.target)
            .map(|sum| prev[sum] || (value <= sum && prev[sum - value]))
            .collect();
        ReachRow::new(reachable)
    }

    fn extract_answer(&self, last: &Self::Row) -> Self::Answer {
        last.get(self.target).unwrap_or(false)
    }
}

/// Decide subset-sum with the default (tabulated) strategy.
///
/// ```
/// use dp_lab::problems::subset_sum::subset_sum;
///
/// assert!(subset_sum(&[3, 2, 7, 1], 6).unwrap());
/// assert!(!subset_sum(&[3, 2, 7, 1], 14).unwrap());
/// ```
pub fn subset_sum(set: &[usize], target: usize) -> Result<bool> {
    tabulated(set, target)
}

/// Brute-force pick/skip recursion.
pub fn recursive(set: &[usize], target: usize) -> Result<bool> {
    if set.is_empty() {
        return Err(LabError::EmptySet);
    }
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("subset_sum_recursive", n = set.len(), target).entered();
    Ok(recurse(set, target))
}

fn recurse(set: &[usize], target: usize) -> bool {
    if target == 0 {
        return true;
    }
    match set {
        [] => false,
        [last] => *last == target,
        [value, rest @ ..] => {
            let pick = *value <= target && recurse(rest, target - value);
            pick || recurse(rest, target)
        }
    }
}

/// Cache lookups performed by one memoized query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoStats {
    /// Lookups answered from the cache.
    pub hits: usize,
    /// Lookups that had to recurse.
    pub misses: usize,
}

/// Memo entry for one (index, remaining target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemoCell {
    Unknown,
    Reachable,
    Unreachable,
}

impl From<bool> for MemoCell {
    fn from(hit: bool) -> Self {
        if hit {
            MemoCell::Reachable
        } else {
            MemoCell::Unreachable
        }
    }
}

struct Memo<'a> {
    set: &'a [usize],
    width: usize,
    cells: Vec<MemoCell>,
    stats: MemoStats,
}

impl Memo<'_> {
    fn solve(&mut self, index: usize, target: usize) -> bool {
        if target == 0 {
            return true;
        }
        let Some(&value) = self.set.get(index) else {
            return false;
        };
        if index + 1 == self.set.len() {
            return value == target;
        }

        let key = index * self.width + target;
        match self.cells[key] {
            MemoCell::Reachable => {
                self.stats.hits += 1;
                return true;
            }
            MemoCell::Unreachable => {
                self.stats.hits += 1;
                return false;
            }
            MemoCell::Unknown => self.stats.misses += 1,
        }

        let pick = value <= target && self.solve(index + 1, target - value);
        let hit = pick || self.solve(index + 1, target);
        self.cells[key] = MemoCell::from(hit);
        hit
    }
}

/// Memoized recursion with the default table budget.
pub fn memoized(set: &[usize], target: usize) -> Result<bool> {
    memoized_with_stats(set, target, DEFAULT_MAX_TABLE_CELLS).map(|(hit, _)| hit)
}

/// Memoized recursion, also reporting cache hits and misses.
///
/// The memo holds `set.len() × (target + 1)` cells; exceeding
/// `max_table_cells` yields [`LabError::TableTooLarge`].
pub fn memoized_with_stats(
    set: &[usize],
    target: usize,
    max_table_cells: usize,
) -> Result<(bool, MemoStats)> {
    if set.is_empty() {
        return Err(LabError::EmptySet);
    }
    let cells = check_table_budget(set.len(), target, max_table_cells)?;
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("subset_sum_memoized", n = set.len(), target, cells).entered();

    let mut memo = Memo {
        set,
        width: target + 1,
        cells: vec![MemoCell::Unknown; cells],
        stats: MemoStats::default(),
    };
    let hit = memo.solve(0, target);

    #[cfg(feature = "tracing")]
    tracing::debug!(hit, hits = memo.stats.hits, misses = memo.stats.misses, "memoized query done");

    Ok((hit, memo.stats))
}

/// Bottom-up tabulation with the default table budget.
pub fn tabulated(set: &[usize], target: usize) -> Result<bool> {
    tabulated_within(set, target, DEFAULT_MAX_TABLE_CELLS)
}

pub(crate) fn tabulated_within(set: &[usize], target: usize, max_table_cells: usize) -> Result<bool> {
    let problem = SubsetSumProblem::new_within(set, target, max_table_cells)?;
    let (hit, _) = TableEngine::new(problem).run();
    Ok(hit)
}

/// Every sum in `0..=target` reachable by some subset of `set`.
pub fn reachable_sums(set: &[usize], target: usize) -> Result<Vec<usize>> {
    reachable_sums_within(set, target, DEFAULT_MAX_TABLE_CELLS)
}

pub(crate) fn reachable_sums_within(
    set: &[usize],
    target: usize,
    max_table_cells: usize,
) -> Result<Vec<usize>> {
    let problem = SubsetSumProblem::new_within(set, target, max_table_cells)?;
    let (_, rows) = TableEngine::new(problem).run();
    Ok(rows
        .last()
        .map(|row| row.reachable_sums().collect())
        .unwrap_or_default())
}

/// Indices (ascending) of a subset of `set` summing to `target`.
///
/// Returns `Ok(None)` when the target is unreachable and `Ok(Some(vec![]))`
/// for `target == 0`.
///
/// ```
/// use dp_lab::problems::subset_sum::witness;
///
/// let set = [3, 2, 7, 1];
/// let picked = witness(&set, 6).unwrap().unwrap();
/// assert_eq!(picked.iter().map(|&i| set[i]).sum::<usize>(), 6);
/// ```
pub fn witness(set: &[usize], target: usize) -> Result<Option<Vec<usize>>> {
    witness_within(set, target, DEFAULT_MAX_TABLE_CELLS)
}

pub(crate) fn witness_within(
    set: &[usize],
    target: usize,
    max_table_cells: usize,
) -> Result<Option<Vec<usize>>> {
    let problem = SubsetSumProblem::new_within(set, target, max_table_cells)?;
    Ok(problem.witness())
}

/// Walk the table from the bottom-right cell back to row 0.
///
/// When `table[i][j]` holds but `table[i-1][j]` does not, element `i` must
/// have been picked.
fn backtrack(set: &[usize], table: &ReachTable, target: usize) -> Option<Vec<usize>> {
    let last = table.num_rows().checked_sub(1)?;
    if !table.get(last, target)? {
        return None;
    }

    let mut picked = Vec::new();
    let mut remaining = target;
    for row in (1..=last).rev() {
        if remaining == 0 {
            break;
        }
        if table.get(row - 1, remaining)? {
            continue;
        }
        picked.push(row);
        remaining -= set[row];
    }
    if remaining != 0 {
        debug_assert_eq!(set.first(), Some(&remaining));
        picked.push(0);
    }
    picked.reverse();
    Some(picked)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [usize; 4] = [3, 2, 7, 1];

    fn all_strategies(set: &[usize], target: usize) -> [bool; 3] {
        [
            recursive(set, target).unwrap(),
            memoized(set, target).unwrap(),
            tabulated(set, target).unwrap(),
        ]
    }

    #[test]
    fn lab_sample() {
        assert_eq!(all_strategies(&SAMPLE, 6), [true; 3]);
        assert_eq!(all_strategies(&SAMPLE, 13), [true; 3]);
        assert_eq!(all_strategies(&SAMPLE, 14), [false; 3]);
    }

    #[test]
    fn zero_target_always_reachable() {
        assert_eq!(all_strategies(&[5], 0), [true; 3]);
        assert_eq!(all_strategies(&SAMPLE, 0), [true; 3]);
    }

    #[test]
    fn single_element() {
        assert_eq!(all_strategies(&[4], 4), [true; 3]);
        assert_eq!(all_strategies(&[4], 3), [false; 3]);
        assert_eq!(all_strategies(&[4], 5), [false; 3]);
    }

    #[test]
    fn zero_valued_elements() {
        assert_eq!(all_strategies(&[0, 0, 5], 5), [true; 3]);
        assert_eq!(all_strategies(&[0, 0], 1), [false; 3]);
    }

    #[test]
    fn empty_set_rejected() {
        assert_eq!(recursive(&[], 1), Err(LabError::EmptySet));
        assert_eq!(memoized(&[], 1), Err(LabError::EmptySet));
        assert_eq!(tabulated(&[], 1), Err(LabError::EmptySet));
        assert_eq!(witness(&[], 0), Err(LabError::EmptySet));
    }

    #[test]
    fn budget_enforced() {
        assert!(matches!(
            memoized_with_stats(&SAMPLE, 10, 8),
            Err(LabError::TableTooLarge { cells: Some(44), limit: 8 })
        ));
        assert!(matches!(
            tabulated_within(&SAMPLE, 10, 8),
            Err(LabError::TableTooLarge { .. })
        ));
    }

    #[test]
    fn constructor_rejects_oversized_tables() {
        assert_eq!(
            SubsetSumProblem::new(&[1], usize::MAX).unwrap_err(),
            LabError::TableTooLarge {
                cells: None,
                limit: DEFAULT_MAX_TABLE_CELLS
            }
        );
        assert_eq!(
            SubsetSumProblem::new(&SAMPLE, DEFAULT_MAX_TABLE_CELLS).unwrap_err(),
            LabError::TableTooLarge {
                cells: Some(4 * (DEFAULT_MAX_TABLE_CELLS + 1)),
                limit: DEFAULT_MAX_TABLE_CELLS
            }
        );
        assert!(SubsetSumProblem::new_within(&SAMPLE, 6, 28).is_ok());
        assert!(SubsetSumProblem::new_within(&SAMPLE, 6, 27).is_err());
        assert_eq!(
            tabulated(&[1], usize::MAX).unwrap_err(),
            LabError::TableTooLarge {
                cells: None,
                limit: DEFAULT_MAX_TABLE_CELLS
            }
        );
        assert!(witness(&[1], usize::MAX).is_err());
    }

    #[test]
    fn problem_witness_uses_its_own_instance() {
        let problem = SubsetSumProblem::new(&SAMPLE, 9).unwrap();
        assert_eq!(problem.set(), &SAMPLE);
        assert_eq!(problem.target(), 9);
        let picked = problem.witness().unwrap();
        assert_eq!(picked.iter().map(|&i| SAMPLE[i]).sum::<usize>(), 9);
        assert_eq!(SubsetSumProblem::new(&SAMPLE, 14).unwrap().witness(), None);
    }

    #[test]
    fn memo_reuses_subproblems() {
        // Repeated ones make many (index, target) pairs recur.
        let set = [1; 12];
        let (hit, stats) = memoized_with_stats(&set, 20, DEFAULT_MAX_TABLE_CELLS).unwrap();
        assert!(!hit);
        assert!(stats.hits > 0);
        assert!(stats.misses > 0);
    }

    #[test]
    fn table_rows_follow_prefixes() {
        let problem = SubsetSumProblem::new(&SAMPLE, 6).unwrap();
        let table = problem.table();
        assert_eq!(table.num_rows(), 4);
        // {3}
        let row0: Vec<_> = table.row(0).unwrap().reachable_sums().collect();
        assert_eq!(row0, vec![0, 3]);
        // {3, 2}
        let row1: Vec<_> = table.row(1).unwrap().reachable_sums().collect();
        assert_eq!(row1, vec![0, 2, 3, 5]);
        assert_eq!(table.get(3, 6), Some(true));
    }

    #[test]
    fn first_element_beyond_target() {
        let problem = SubsetSumProblem::new(&[9, 1], 2).unwrap();
        let table = problem.table();
        assert_eq!(table.get(0, 1), Some(false));
        assert_eq!(table.get(1, 1), Some(true));
        assert_eq!(table.get(1, 2), Some(false));
    }

    #[test]
    fn witness_sums_to_target() {
        for target in 0..=13 {
            let picked = witness(&SAMPLE, target).unwrap().expect("all sums up to 13 reachable");
            assert!(picked.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(picked.iter().map(|&i| SAMPLE[i]).sum::<usize>(), target);
        }
        assert_eq!(witness(&SAMPLE, 14).unwrap(), None);
        assert_eq!(witness(&SAMPLE, 0).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn reachable_sums_of_gappy_set() {
        assert_eq!(reachable_sums(&[4, 6], 12).unwrap(), vec![0, 4, 6, 10]);
    }

    #[test]
    fn input_not_mutated_and_idempotent() {
        let set = SAMPLE.to_vec();
        let first = all_strategies(&set, 9);
        let second = all_strategies(&set, 9);
        assert_eq!(first, second);
        assert_eq!(set, SAMPLE.to_vec());
    }
}
