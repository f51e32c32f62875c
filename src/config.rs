//! Solver configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::LabError;

/// Default cell budget for memo and tabulation tables (2^26 cells).
pub const DEFAULT_MAX_TABLE_CELLS: usize = 1 << 26;

/// Subset-sum evaluation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Full inclusion/exclusion recursion, O(2^n).
    Recursive,
    /// Recursion with an (index, remaining target) cache, O(n·target).
    Memoized,
    /// Bottom-up table fill, O(n·target), no recursion.
    #[default]
    Tabulated,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Recursive, Strategy::Memoized, Strategy::Tabulated];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Memoized => "memoized",
            Strategy::Tabulated => "tabulated",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = LabError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(Strategy::Recursive),
            "memoized" => Ok(Strategy::Memoized),
            "tabulated" => Ok(Strategy::Tabulated),
            other => Err(LabError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Settings for [`SubsetSumSolver`](crate::solver::SubsetSumSolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Upper bound on `|set| × (target + 1)` for the memo and tabulation
    /// strategies. The recursive strategy allocates no table and ignores it.
    pub max_table_cells: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}
