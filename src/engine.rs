//! Generic bottom-up table engine.
//!
//! The engine drives any [`LayeredProblem`] row by row:
//! 1. Build row 0 from the base cases.
//! 2. Derive each following row from its predecessor only.
//! 3. Read the answer off the final row.
//!
//! Depending on [`RowRetention`], earlier rows are either dropped as soon as
//! their successor exists (O(W) memory for row width W) or kept so callers
//! can backtrack through the whole table.

use crate::traits::LayeredProblem;

/// How many rows the engine keeps while filling the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowRetention {
    /// Keep only the most recent row.
    #[default]
    Rolling,
    /// Keep every row, in order.
    Full,
}

/// Table engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use dp_lab::{TableEngine, problems::subset_sum::SubsetSumProblem};
///
/// let set = [3, 2, 7, 1];
/// let problem = SubsetSumProblem::new(&set, 6).unwrap();
/// let (reachable, rows) = TableEngine::new(problem).run();
/// assert!(reachable);
/// assert_eq!(rows.len(), 1);
/// ```
pub struct TableEngine<P: LayeredProblem> {
    problem: P,
    retention: RowRetention,
}

impl<P: LayeredProblem> TableEngine<P> {
    /// Create a new engine that keeps only the latest row.
    pub fn new(problem: P) -> Self {
        Self::with_retention(problem, RowRetention::Rolling)
    }

    /// Create a new engine with an explicit retention policy.
    pub fn with_retention(problem: P, retention: RowRetention) -> Self {
        Self { problem, retention }
    }

    /// Return the configured retention policy.
    pub fn retention(&self) -> RowRetention {
        self.retention
    }

    /// Fill the table and extract the answer.
    ///
    /// Returns `(answer, rows)`. Under [`RowRetention::Full`] `rows` holds
    /// every row `0..T`; under [`RowRetention::Rolling`] it holds only the
    /// final row.
    ///
    /// A problem reporting zero layers is treated as having only its base row.
    pub fn run(&self) -> (P::Answer, Vec<P::Row>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "table_run",
            layers = self.problem.num_layers(),
            retention = ?self.retention
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let t = self.problem.num_layers().max(1);
        let mut rows = Vec::with_capacity(match self.retention {
            RowRetention::Full => t,
            RowRetention::Rolling => 1,
        });
        let mut row = self.problem.init_row();

        for layer in 1..t {
            #[cfg(feature = "tracing")]
            let _step = tracing::trace_span!("forward_step", layer).entered();
            let next = self.problem.forward_step(layer, &row);
            if self.retention == RowRetention::Full {
                rows.push(row);
            }
            row = next;
        }

        let answer = self.problem.extract_answer(&row);
        rows.push(row);
        (answer, rows)
    }
}
