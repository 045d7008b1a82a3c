//! # Matrix implementation
//!
//! A dense matrix type with the algebraic and row reduction operators the simplex method needs.
//! Uses a `Vec<Vec<f64>>` as underlying data structure, row-major, indices starting at `0`.
use std::slice::Iter;

use itertools::Itertools;

/// Dense `f64` matrix.
///
/// Dimensions are fixed at creation except through the explicit reshaping operators (`transpose`,
/// `hcat`, `invert`), which replace the backing storage atomically. `Clone` is the deep copy.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<Vec<f64>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl DenseMatrix {
    /// Create a `DenseMatrix` from the provided data.
    pub fn from_data(data: Vec<Vec<f64>>) -> DenseMatrix {
        let (nr_rows, nr_columns) = get_data_dimensions(&data);
        DenseMatrix { data, nr_rows, nr_columns }
    }

    /// Create a dense matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> DenseMatrix {
        debug_assert!(nr_rows > 0);
        debug_assert!(nr_columns > 0);

        let mut data = Vec::with_capacity(nr_rows);
        for _ in 0..nr_rows {
            data.push(vec![0f64; nr_columns]);
        }

        DenseMatrix { data, nr_rows, nr_columns }
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> DenseMatrix {
        debug_assert!(len > 0);

        let mut matrix = DenseMatrix::zeros(len, len);
        for i in 0..len {
            matrix.data[i][i] = 1f64;
        }

        matrix
    }

    /// Create a matrix with a single column holding the provided `values`.
    pub fn column_vector(values: Vec<f64>) -> DenseMatrix {
        debug_assert!(!values.is_empty());

        DenseMatrix::from_data(values.into_iter().map(|value| vec![value]).collect())
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Iter<'_, f64> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<f64> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Read a `1 x 1` matrix as a number.
    pub fn scalar(&self) -> f64 {
        debug_assert!(self.nr_rows == 1 && self.nr_columns == 1);

        self.data[0][0]
    }

    /// Interchange this matrix with its transpose, in place.
    ///
    /// The backing storage is replaced; an `n x m` matrix becomes `m x n`.
    pub fn transpose(&mut self) {
        let mut transposed = DenseMatrix::zeros(self.nr_columns, self.nr_rows);
        for i in 0..self.nr_rows {
            for j in 0..self.nr_columns {
                transposed.data[j][i] = self.data[i][j];
            }
        }

        *self = transposed;
    }

    /// Standard matrix multiplication, allocating a new `self.nr_rows x other.nr_columns` matrix.
    pub fn multiply(&self, other: &DenseMatrix) -> DenseMatrix {
        debug_assert_eq!(self.nr_columns, other.nr_rows);

        let mut result = DenseMatrix::zeros(self.nr_rows, other.nr_columns);
        for i in 0..self.nr_rows {
            for j in 0..other.nr_columns {
                for p in 0..self.nr_columns {
                    result.data[i][j] += self.data[i][p] * other.data[p][j];
                }
            }
        }

        result
    }

    /// Multiply every value in this matrix with `factor`, in place.
    pub fn scale(&mut self, factor: f64) {
        for row in self.data.iter_mut() {
            for value in row.iter_mut() {
                *value *= factor;
            }
        }
    }

    /// Add `other` to this matrix element-wise, in place. Dimensions must be identical.
    pub fn add(&mut self, other: &DenseMatrix) {
        debug_assert_eq!(self.nr_rows, other.nr_rows);
        debug_assert_eq!(self.nr_columns, other.nr_columns);

        for (row, other_row) in self.data.iter_mut().zip(&other.data) {
            for (value, other_value) in row.iter_mut().zip(other_row) {
                *value += other_value;
            }
        }
    }

    /// Extract the sub-matrix consisting of the given `columns`, preserving their order.
    ///
    /// Every index must be smaller than `self.nr_columns`.
    pub fn take_columns(&self, columns: &[usize]) -> DenseMatrix {
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns));

        let data = self.data.iter()
            .map(|row| columns.iter().map(|&j| row[j]).collect())
            .collect();

        DenseMatrix::from_data(data)
    }

    /// Extract the sub-matrix consisting of the given `rows`, preserving their order.
    ///
    /// Every index must be smaller than `self.nr_rows`.
    pub fn take_rows(&self, rows: &[usize]) -> DenseMatrix {
        debug_assert!(rows.iter().all(|&i| i < self.nr_rows));

        DenseMatrix::from_data(rows.iter().map(|&i| self.data[i].clone()).collect())
    }

    /// Concatenate `other` to the "right" (high column indices) of this matrix, in place.
    ///
    /// The number of rows must be equal; the backing storage is reallocated to the joint width.
    pub fn hcat(&mut self, other: &DenseMatrix) {
        debug_assert_eq!(self.nr_rows, other.nr_rows);

        for (row, extension) in self.data.iter_mut().zip(&other.data) {
            row.extend_from_slice(extension);
        }
        self.nr_columns += other.nr_columns;
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: f64) {
        debug_assert!(i < self.nr_rows);

        for value in self.data[i].iter_mut() {
            *value *= factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: f64) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);

        for j in 0..self.nr_columns {
            self.data[write_row][j] += factor * self.data[read_row][j];
        }
    }

    /// Interchange rows `i` and `other`.
    pub fn swap_rows(&mut self, i: usize, other: usize) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(other < self.nr_rows);

        self.data.swap(i, other);
    }

    /// Bring this matrix into reduced row echelon form with Gauss-Jordan elimination, in place.
    ///
    /// Pivot columns are visited left to right, bounded by `min(nr_rows, nr_columns)`. When the
    /// current pivot row has a value within `tolerance` of zero in the pivot column, a row below
    /// with a nonzero value is swapped up; if there is none, the column is skipped and only the
    /// column cursor advances. Otherwise the pivot row is scaled so the pivot value becomes
    /// exactly `1` and the column is eliminated from all other rows. Zero rows end up at the
    /// bottom.
    ///
    /// # Return value
    ///
    /// The final value of the pivot row cursor, which equals the rank of the matrix.
    pub fn row_reduce(&mut self, tolerance: f64) -> usize {
        let nr_pivot_columns = usize::min(self.nr_rows, self.nr_columns);
        let mut pivot_row = 0;
        let mut column = 0;

        while column < nr_pivot_columns {
            if self.data[pivot_row][column].abs() <= tolerance {
                let below = (pivot_row..self.nr_rows)
                    .find(|&i| self.data[i][column].abs() > tolerance);
                match below {
                    Some(row) => self.swap_rows(pivot_row, row),
                    None => {
                        // No pivot in this column, the rank does not increase.
                        column += 1;
                        continue;
                    },
                }
            }

            let pivot = self.data[pivot_row][column];
            if pivot != 1f64 {
                self.multiply_row(pivot_row, 1f64 / pivot);
                self.data[pivot_row][column] = 1f64;
            }

            for i in 0..self.nr_rows {
                if i != pivot_row && self.data[i][column].abs() > tolerance {
                    let factor = -self.data[i][column];
                    self.mul_add_rows(pivot_row, i, factor);
                    self.data[i][column] = 0f64;
                }
            }

            column += 1;
            pivot_row += 1;
        }

        pivot_row
    }

    /// Replace this square matrix with its inverse, in place.
    ///
    /// The matrix is augmented with an identity block, row reduced, and replaced with the right
    /// half of the result. The caller guarantees that the matrix is invertible; the result is
    /// unspecified for a singular matrix.
    pub fn invert(&mut self, tolerance: f64) {
        debug_assert_eq!(self.nr_rows, self.nr_columns);

        let n = self.nr_rows;
        self.hcat(&DenseMatrix::identity(n));
        let rank = self.row_reduce(tolerance);
        debug_assert_eq!(rank, n);

        *self = self.take_columns(&(n..(2 * n)).collect_vec());
    }

    /// Determinant of a square matrix.
    ///
    /// Only the `2 x 2` case is implemented; any other size returns `0`. This is a known
    /// limitation, not a general determinant.
    pub fn determinant(&self) -> f64 {
        debug_assert_eq!(self.nr_rows, self.nr_columns);

        if self.nr_rows == 2 {
            self.data[0][0] * self.data[1][1] - self.data[0][1] * self.data[1][0]
        } else {
            0f64
        }
    }
}

/// If all row lengths agree, return the dimensions of the vector `data`.
fn get_data_dimensions(data: &[Vec<f64>]) -> (usize, usize) {
    let nr_rows = data.len();
    debug_assert!(nr_rows > 0);
    let nr_columns = data[0].len();
    debug_assert!(nr_columns > 0);
    debug_assert!(
        data.iter().all(|row| row.len() == nr_columns),
        "Row lengths not equal: first row has length {}", nr_columns,
    );

    (nr_rows, nr_columns)
}

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::data::linear_algebra::EPSILON;

    fn test_matrix() -> DenseMatrix {
        DenseMatrix::from_data(vec![
            vec![1f64, 2f64, 0f64],
            vec![0f64, 5f64, 6f64],
        ])
    }

    #[test]
    fn create() {
        let m = test_matrix();
        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.nr_columns(), 3);
        assert_approx_eq!(m.get_value(0, 0), 1f64);
        assert_approx_eq!(m.get_value(1, 2), 6f64);

        let m = DenseMatrix::zeros(3, 5);
        assert_approx_eq!(m.get_value(0, 0), 0f64);
        assert_approx_eq!(m.get_value(2, 4), 0f64);

        let m = DenseMatrix::identity(4);
        assert_approx_eq!(m.get_value(0, 0), 1f64);
        assert_approx_eq!(m.get_value(3, 3), 1f64);
        assert_approx_eq!(m.get_value(0, 3), 0f64);
        assert_approx_eq!(m.get_value(3, 2), 0f64);

        let m = DenseMatrix::column_vector(vec![1f64, 2f64, 3f64]);
        assert_eq!((m.nr_rows(), m.nr_columns()), (3, 1));
        assert_approx_eq!(m.get_value(1, 0), 2f64);
    }

    #[test]
    fn get_set() {
        let mut m = test_matrix();

        assert_approx_eq!(m.get_value(0, 2), 0f64);
        m.set_value(0, 2, 3f64);
        assert_approx_eq!(m.get_value(0, 2), 3f64);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get() {
        let m = test_matrix();

        m.get_value(2, 0);
    }

    #[test]
    fn row_column() {
        let m = test_matrix();

        assert_approx_eq!(m.column(1).iter().sum::<f64>(), 2f64 + 5f64);
        assert_approx_eq!(m.row(1).sum::<f64>(), 5f64 + 6f64);
    }

    #[test]
    fn transpose() {
        let mut m = test_matrix();
        m.transpose();

        assert_eq!((m.nr_rows(), m.nr_columns()), (3, 2));
        assert_approx_eq!(m.get_value(1, 0), 2f64);
        assert_approx_eq!(m.get_value(2, 1), 6f64);
    }

    #[test]
    fn multiply() {
        let m = test_matrix();
        let identity = DenseMatrix::identity(3);
        assert_eq!(m.multiply(&identity), m);

        let v = DenseMatrix::column_vector(vec![1f64, 1f64, 1f64]);
        let product = m.multiply(&v);
        assert_eq!((product.nr_rows(), product.nr_columns()), (2, 1));
        assert_approx_eq!(product.get_value(0, 0), 3f64);
        assert_approx_eq!(product.get_value(1, 0), 11f64);
    }

    #[test]
    fn scale_add() {
        let mut m = test_matrix();
        m.scale(2f64);
        assert_approx_eq!(m.get_value(1, 1), 10f64);

        let mut other = test_matrix();
        other.add(&m);
        assert_approx_eq!(other.get_value(1, 2), 6f64 + 12f64);
    }

    #[test]
    fn sub_matrices() {
        let m = test_matrix();

        let columns = m.take_columns(&[2, 0]);
        assert_eq!(columns, DenseMatrix::from_data(vec![
            vec![0f64, 1f64],
            vec![6f64, 0f64],
        ]));

        let rows = m.take_rows(&[1]);
        assert_eq!(rows, DenseMatrix::from_data(vec![vec![0f64, 5f64, 6f64]]));
    }

    #[test]
    fn hcat() {
        let mut m = test_matrix();
        m.hcat(&DenseMatrix::identity(2));

        assert_eq!((m.nr_rows(), m.nr_columns()), (2, 5));
        assert_approx_eq!(m.get_value(0, 3), 1f64);
        assert_approx_eq!(m.get_value(1, 3), 0f64);
        assert_approx_eq!(m.get_value(1, 4), 1f64);
    }

    #[test]
    fn row_reduce_full_rank() {
        let mut m = DenseMatrix::from_data(vec![
            vec![2f64, 1f64],
            vec![1f64, 1f64],
        ]);
        let rank = m.row_reduce(EPSILON);

        assert_eq!(rank, 2);
        assert_eq!(m, DenseMatrix::identity(2));
    }

    #[test]
    fn row_reduce_rank_deficient() {
        // The second row is twice the first, the zero row sinks to the bottom.
        let mut m = DenseMatrix::from_data(vec![
            vec![1f64, 2f64, 3f64],
            vec![2f64, 4f64, 6f64],
            vec![0f64, 1f64, 1f64],
        ]);
        let rank = m.row_reduce(EPSILON);

        assert_eq!(rank, 2);
        for j in 0..3 {
            assert_approx_eq!(m.get_value(2, j), 0f64);
        }
    }

    #[test]
    fn row_reduce_needs_row_swap() {
        let mut m = DenseMatrix::from_data(vec![
            vec![0f64, 1f64],
            vec![1f64, 0f64],
        ]);
        let rank = m.row_reduce(EPSILON);

        assert_eq!(rank, 2);
        assert_eq!(m, DenseMatrix::identity(2));
    }

    #[test]
    fn invert_round_trip() {
        let m = DenseMatrix::from_data(vec![
            vec![4f64, 7f64],
            vec![2f64, 6f64],
        ]);
        let mut inverse = m.clone();
        inverse.invert(EPSILON);

        let product = m.multiply(&inverse);
        for i in 0..2 {
            for j in 0..2 {
                assert_approx_eq!(product.get_value(i, j), if i == j { 1f64 } else { 0f64 });
            }
        }
    }

    #[test]
    fn determinant() {
        let m = DenseMatrix::from_data(vec![
            vec![1f64, 2f64],
            vec![3f64, 4f64],
        ]);
        assert_approx_eq!(m.determinant(), 1f64 * 4f64 - 2f64 * 3f64);

        // Only the 2 x 2 case is implemented.
        assert_approx_eq!(DenseMatrix::identity(3).determinant(), 0f64);
    }
}
