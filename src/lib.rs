//! Dynamic-programming lab exercises.
//!
//! This crate collects three classical algorithms from a data-structures and
//! algorithms course, with the subset-sum decision problem at its core.
//!
//! ## Subset sum
//! Decide whether some subset of a non-empty sequence of non-negative
//! integers sums exactly to a target. Three strategies are available and
//! always agree:
//! 1. brute-force pick/skip recursion, O(2^n);
//! 2. memoized recursion keyed by (index, remaining target), O(n·target);
//! 3. bottom-up tabulation through the generic [`TableEngine`], O(n·target)
//!    with no recursion. This is the default.
//!
//! Pick one with [`SolverBuilder`] or [`SubsetSumSolver::with_strategy`].
//!
//! ## Quick start
//! ```
//! use dp_lab::{SolverBuilder, Strategy};
//!
//! let solver = SolverBuilder::new().strategy(Strategy::Tabulated).build();
//! assert!(solver.solve(&[3, 2, 7, 1], 6).unwrap());
//! assert_eq!(solver.witness(&[3, 2, 7, 1], 6).unwrap(), Some(vec![0, 1, 3]));
//! ```
//!
//! ## Companion exercises
//! The `problems` module also contains:
//! - fast integer power by repeated halving,
//! - splitting an array into `k` contiguous parts minimising the largest sum
//!   (binary search over the answer).
//!
//! ## Writing your own tabulated DP
//! Implement [`LayeredProblem`] for any recurrence where row `i` depends only
//! on row `i - 1`, then run it with [`TableEngine`].

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod problems;
pub mod solver;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::{SolverBuilder, TableEngineBuilder};
pub use crate::config::{SolverConfig, Strategy};
pub use crate::engine::{RowRetention, TableEngine};
pub use crate::error::{LabError, Result};
pub use crate::solver::SubsetSumSolver;
pub use crate::traits::LayeredProblem;
