//! Strategy-dispatching subset-sum solver.
//!
//! [`SubsetSumSolver`] puts the three strategies behind one interface so a
//! caller picks exactly one through [`SolverConfig`], and so the strategies
//! can be checked against each other on the same inputs.

use crate::config::{SolverConfig, Strategy};
use crate::error::{LabError, Result};
use crate::problems::subset_sum::{
    memoized_with_stats, reachable_sums_within, recursive, tabulated_within, witness_within,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Subset-sum solver configured with one [`Strategy`].
///
/// ```
/// use dp_lab::{SolverBuilder, Strategy};
///
/// let solver = SolverBuilder::new().strategy(Strategy::Memoized).build();
/// assert!(solver.solve(&[3, 2, 7, 1], 6).unwrap());
/// assert!(!solver.solve(&[3, 2, 7, 1], 14).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubsetSumSolver {
    config: SolverConfig,
}

impl SubsetSumSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solver for `strategy` with the default table budget.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(SolverConfig {
            strategy,
            ..SolverConfig::default()
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    /// Decide whether some subset of `set` sums to `target`.
    pub fn solve(&self, set: &[usize], target: usize) -> Result<bool> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "subset_sum",
            strategy = %self.config.strategy,
            n = set.len(),
            target
        )
        .entered();

        let hit = match self.config.strategy {
            Strategy::Recursive => recursive(set, target)?,
            Strategy::Memoized => memoized_with_stats(set, target, self.config.max_table_cells)?.0,
            Strategy::Tabulated => tabulated_within(set, target, self.config.max_table_cells)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(hit, "subset sum decided");

        Ok(hit)
    }

    /// Answer several targets over the same set, in input order.
    ///
    /// The tabulated strategy fills one table up to the largest target and
    /// reads every answer from its last row. The recursive strategies answer
    /// each target on its own (in parallel with the `parallel` feature).
    ///
    /// Under [`Strategy::Tabulated`] the table budget is checked once, against
    /// the largest target. A single oversized target therefore fails the whole
    /// batch with [`LabError::TableTooLarge`], even though [`solve`](Self::solve)
    /// would still answer the smaller targets one by one.
    pub fn solve_many(&self, set: &[usize], targets: &[usize]) -> Result<Vec<bool>> {
        if set.is_empty() {
            return Err(LabError::EmptySet);
        }
        match self.config.strategy {
            Strategy::Tabulated => {
                let Some(&max_target) = targets.iter().max() else {
                    return Ok(Vec::new());
                };
                let sums = reachable_sums_within(set, max_target, self.config.max_table_cells)?;
                let mut hits = vec![false; max_target + 1];
                for sum in sums {
                    hits[sum] = true;
                }
                Ok(targets.iter().map(|&t| hits[t]).collect())
            }
            Strategy::Recursive | Strategy::Memoized => self.solve_each(set, targets),
        }
    }

    #[cfg(feature = "parallel")]
    fn solve_each(&self, set: &[usize], targets: &[usize]) -> Result<Vec<bool>> {
        targets.par_iter().map(|&t| self.solve(set, t)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn solve_each(&self, set: &[usize], targets: &[usize]) -> Result<Vec<bool>> {
        targets.iter().map(|&t| self.solve(set, t)).collect()
    }

    /// Ascending indices of a subset summing to `target`, if any.
    ///
    /// Always backtracks through a full tabulation table, whatever the
    /// configured strategy; the table budget still applies.
    pub fn witness(&self, set: &[usize], target: usize) -> Result<Option<Vec<usize>>> {
        witness_within(set, target, self.config.max_table_cells)
    }

    /// Every sum in `0..=target` that some subset reaches.
    pub fn reachable_sums(&self, set: &[usize], target: usize) -> Result<Vec<usize>> {
        reachable_sums_within(set, target, self.config.max_table_cells)
    }
}
