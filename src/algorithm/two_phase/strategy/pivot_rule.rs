//! # Pivot rules
//!
//! Strategies for selecting the column that enters the basis. The row that leaves is decided by
//! the ratio test, independent of the strategy.
use crate::data::linear_algebra::matrix::DenseMatrix;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `cost`: Reduced cost column vector of a maximization problem in canonical form. Basic
    /// columns have reduced cost zero and are never selected.
    ///
    /// # Return value
    ///
    /// The index of a column with a reduced cost above `tolerance`, or `None` when there is none
    /// and the current basis is optimal.
    fn select_primal_pivot_column(&mut self, cost: &DenseMatrix, tolerance: f64) -> Option<usize>;
}

/// Simply pivot on the first column which has a positive reduced cost.
///
/// Deterministic Bland-like rule: scanning left to right bounds the risk of cycling on degenerate
/// bases, at the cost of possibly more iterations.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, cost: &DenseMatrix, tolerance: f64) -> Option<usize> {
        debug_assert_eq!(cost.nr_columns(), 1);

        (0..cost.nr_rows()).find(|&j| cost.get_value(j, 0) > tolerance)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::linear_algebra::EPSILON;

    #[test]
    fn find_profitable_column() {
        let cost = DenseMatrix::column_vector(vec![0f64, -1f64, 2f64, 3f64]);
        let mut rule = FirstProfitable::new();

        assert_eq!(rule.select_primal_pivot_column(&cost, EPSILON), Some(2));
    }

    #[test]
    fn no_profitable_column() {
        let cost = DenseMatrix::column_vector(vec![0f64, -1f64, 0f64]);
        let mut rule = FirstProfitable::new();

        assert_eq!(rule.select_primal_pivot_column(&cost, EPSILON), None);
    }
}
