//! # Algorithms
//!
//! The two phase simplex method and its supporting pieces.
use crate::data::linear_program::solution::Solution;

pub mod two_phase;

/// After solving, either an optimum is found or the problem is determined to allow no optimum.
///
/// Infeasibility and unboundedness are valid outcomes of optimization, not errors; they are kept
/// apart so that callers can distinguish them.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationResult {
    FiniteOptimum(Solution),
    Infeasible,
    Unbounded,
}
