//! Error type shared by every solver in the crate.

use thiserror::Error;

/// Precondition violations reported by the solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabError {
    /// The input sequence has no elements.
    #[error("input set must contain at least one element")]
    EmptySet,
    /// A partition count of zero was requested.
    #[error("number of parts must be at least 1")]
    ZeroParts,
    /// A strategy name did not match any known strategy.
    #[error("unknown strategy '{0}' (expected recursive, memoized or tabulated)")]
    UnknownStrategy(String),
    /// The DP table would exceed the configured cell budget.
    ///
    /// `cells` is `None` when `rows * (target + 1)` overflows `usize`.
    #[error("table of {} cells exceeds limit of {limit}", display_cells(.cells))]
    TableTooLarge { cells: Option<usize>, limit: usize },
}

fn display_cells(cells: &Option<usize>) -> String {
    match cells {
        Some(c) => c.to_string(),
        None => "overflowing".to_string(),
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LabError>;
