//! Core trait for row-by-row (layered) dynamic programs.
//!
//! To run a DP on the [`TableEngine`](crate::engine::TableEngine), implement
//! [`LayeredProblem`] for a struct that captures the instance (input values,
//! target, dimensions).
//!
//! The trait encodes the bottom-up tabulation model:
//! - Layered structure: rows 0..T, one per input element.
//! - Rows: a compact representation of every DP value on a layer.
//! - Transitions: row `i` depends only on row `i - 1` and fixed problem data.
//! - Extraction: the answer is read off the final row.
//!
//! Because no row looks ahead, the engine may discard earlier rows as soon as
//! the next one is built, or keep them all for backtracking.

/// Trait for a tabulated dynamic program instance.
///
/// A `LayeredProblem` corresponds to a *fixed* DP instance: in practice, a
/// struct holding borrowed input data.
///
/// Semantics:
/// - There are `T = num_layers()` rows.
/// - `init_row()` produces row 0 from the base cases.
/// - `forward_step(i, row)` maps row `i - 1` to row `i` for `i` in `1..T`.
/// - `extract_answer` reads the result from row `T - 1`.
pub trait LayeredProblem {
    /// Representation of one DP row (e.g. reachability per partial sum).
    type Row;

    /// Result type read off the final row.
    type Answer;

    /// Number of DP rows `T`. Must be at least 1.
    fn num_layers(&self) -> usize;

    /// Build row 0 from the base cases.
    fn init_row(&self) -> Self::Row;

    /// Build row `layer` from row `layer - 1`.
    ///
    /// Requirements:
    /// - Must only depend on `prev` and fixed problem data.
    /// - Is called with `layer` in `1..num_layers()`, in increasing order.
    fn forward_step(&self, layer: usize, prev: &Self::Row) -> Self::Row;

    /// Extract the answer from the final row.
    fn extract_answer(&self, last: &Self::Row) -> Self::Answer;
}
