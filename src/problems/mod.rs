//! Exercise implementations.
//!
//! - [`subset_sum`]  : subset-sum decision via recursion, memoization or tabulation.
//! - [`power`]       : fast exponentiation by repeated halving.
//! - [`split_array`] : minimise the largest part sum over `k` contiguous parts.
//! - [`geometry`]    : segment intersection, convex hull, closest pair.

pub mod geometry;
pub mod power;
pub mod split_array;
pub mod subset_sum;
