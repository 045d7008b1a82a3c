//! # Bases
//!
//! A basis is a set of column indices whose sub-matrix is invertible, one index per constraint
//! row. The checks here back the linear independence precondition of canonical form re-basing,
//! and a brute force search can produce an initial basis for a matrix of full row rank.
use itertools::Itertools;

use crate::data::linear_algebra::matrix::DenseMatrix;

/// Whether the given columns of `matrix` are linearly independent.
///
/// This is the precondition a basis must satisfy before canonical form re-basing.
pub fn is_full_rank(matrix: &DenseMatrix, columns: &[usize], tolerance: f64) -> bool {
    debug_assert_eq!(columns.len(), matrix.nr_rows());

    let mut sub_matrix = matrix.take_columns(columns);
    sub_matrix.row_reduce(tolerance) == matrix.nr_rows()
}

/// Exhaustively search for a set of columns that forms a basis.
///
/// All column subsets of size `matrix.nr_rows()` are tried in increasing lexicographic order,
/// none twice; the first whose sub-matrix has full rank is returned.
///
/// # Return value
///
/// `None` if no subset qualifies, that is, if the row rank of `matrix` is deficient.
pub fn search(matrix: &DenseMatrix, tolerance: f64) -> Option<Vec<usize>> {
    debug_assert!(matrix.nr_columns() >= matrix.nr_rows());

    (0..matrix.nr_columns())
        .combinations(matrix.nr_rows())
        .find(|columns| is_full_rank(matrix, columns, tolerance))
}
