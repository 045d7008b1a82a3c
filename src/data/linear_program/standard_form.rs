//! # Standard equality form
//!
//! A linear program as the simplex method wants it: `max c'x + z, Ax = b, x >= 0`. Produced from
//! a `GeneralForm` and rewritten in place by canonical form re-basing during pivoting.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::solution::Solution;

/// A linear program in standard equality form.
///
/// The matrices are exclusively owned by this value; `Clone` is the deep copy the two phase
/// method needs to run the auxiliary problem without touching the original.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm {
    /// The coefficient matrix `A`, one row per constraint.
    constraints: DenseMatrix,
    /// The column vector `b`.
    right_hand_side: DenseMatrix,
    /// The objective column vector `c`.
    cost: DenseMatrix,
    /// Constant term of the objective, accumulated during re-basing.
    constant: f64,
    /// Direction of the problem before conversion. The standard form itself always maximizes;
    /// this is needed to report the objective value in the caller's direction.
    original_objective: Objective,
    /// Non-negativity flags of the original problem, needed to fold split variables back.
    non_negative: Vec<bool>,
}

impl StandardForm {
    /// Create a new `StandardForm`.
    ///
    /// Normally created through `GeneralForm::into_standard_form`.
    pub fn new(
        constraints: DenseMatrix,
        right_hand_side: DenseMatrix,
        cost: DenseMatrix,
        constant: f64,
        original_objective: Objective,
        non_negative: Vec<bool>,
    ) -> Self {
        debug_assert_eq!(constraints.nr_rows(), right_hand_side.nr_rows());
        debug_assert_eq!(constraints.nr_columns(), cost.nr_rows());
        debug_assert_eq!(right_hand_side.nr_columns(), 1);
        debug_assert_eq!(cost.nr_columns(), 1);

        Self { constraints, right_hand_side, cost, constant, original_objective, non_negative }
    }

    /// The number of constraints, the row count of `A`.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// The number of variables, the column count of `A`.
    pub fn nr_variables(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// The coefficient matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix {
        &self.constraints
    }

    /// The right-hand side column vector `b`.
    pub fn right_hand_side(&self) -> &DenseMatrix {
        &self.right_hand_side
    }

    /// The objective column vector `c`.
    pub fn cost(&self) -> &DenseMatrix {
        &self.cost
    }

    /// Constant term of the objective.
    ///
    /// In canonical form, this is the objective value of the basic solution.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Rewrite this problem into canonical form for the given basis, in place.
    ///
    /// Afterwards the basis columns of `A` form an identity sub-matrix, `c` holds the reduced
    /// costs (zero in the basic columns) and the constant accumulates the objective value of the
    /// basic solution:
    ///
    /// * `y = (A_B⁻¹)' c_B`
    /// * `z += y'b`
    /// * `c ← c - A'y`
    /// * `A ← A_B⁻¹ A`, `b ← A_B⁻¹ b`
    ///
    /// # Arguments
    ///
    /// * `basis`: One column index per constraint row. The caller guarantees that these columns
    /// are linearly independent (see `basis::is_full_rank`); inversion is unspecified otherwise.
    pub fn canonical_form(&mut self, basis: &[usize], tolerance: f64) {
        debug_assert_eq!(basis.len(), self.nr_constraints());
        debug_assert!(basis.iter().all(|&j| j < self.nr_variables()));

        let mut basis_inverse = self.constraints.take_columns(basis);
        basis_inverse.invert(tolerance);

        let mut basis_inverse_transposed = basis_inverse.clone();
        basis_inverse_transposed.transpose();
        let basic_cost = self.cost.take_rows(basis);
        let mut duals = basis_inverse_transposed.multiply(&basic_cost);
        duals.transpose();

        self.constant += duals.multiply(&self.right_hand_side).scalar();

        let mut cost_change = duals.multiply(&self.constraints);
        cost_change.scale(-1f64);
        cost_change.transpose();
        self.cost.add(&cost_change);

        self.constraints = basis_inverse.multiply(&self.constraints);
        self.right_hand_side = basis_inverse.multiply(&self.right_hand_side);
    }

    /// The basic solution for the given basis, as a column vector over all variables.
    ///
    /// Row `i` contributes `b[i]` at index `basis[i]`; every non-basic variable is `0`. Only
    /// correct when this problem is in canonical form for `basis`.
    pub fn basic_solution(&self, basis: &[usize]) -> DenseMatrix {
        debug_assert_eq!(basis.len(), self.nr_constraints());
        debug_assert!(basis.iter().all(|&j| j < self.nr_variables()));

        let mut solution = DenseMatrix::zeros(self.nr_variables(), 1);
        for (i, &j) in basis.iter().enumerate() {
            solution.set_value(j, 0, self.right_hand_side.get_value(i, 0));
        }

        solution
    }

    /// The basic solution folded back into the variable space of the original problem.
    ///
    /// Split variable pairs are recombined as `x = x⁺ - x⁻` and the objective value is reported
    /// in the original optimization direction. Only correct when this problem is in canonical
    /// form for `basis`.
    pub fn solution(&self, basis: &[usize]) -> Solution {
        let standard_solution = self.basic_solution(basis);

        let mut values = Vec::with_capacity(self.non_negative.len());
        let mut column = 0;
        for &non_negative in &self.non_negative {
            if non_negative {
                values.push(standard_solution.get_value(column, 0));
            } else {
                values.push(
                    standard_solution.get_value(column, 0)
                        - standard_solution.get_value(column + 1, 0),
                );
                column += 1;
            }
            column += 1;
        }

        let objective_value = match self.original_objective {
            Objective::Maximize => self.constant,
            Objective::Minimize => -self.constant,
        };

        Solution::new(objective_value, values)
    }

    /// The phase one problem: an identity block of artificial variables appended to `A`, with an
    /// objective that maximizes the negated sum of the artificial variables.
    ///
    /// Rows with a negative right-hand side are negated first, so that the all-artificial basis
    /// is feasible. A row negation changes neither the solution set nor the linear dependencies
    /// between rows, so bases and redundant row indices found on the auxiliary problem remain
    /// valid for `self`.
    pub fn auxiliary(&self) -> StandardForm {
        let nr_artificial = self.nr_constraints();
        let first_artificial = self.nr_variables();

        let mut auxiliary = self.clone();
        for i in 0..nr_artificial {
            if auxiliary.right_hand_side.get_value(i, 0) < 0f64 {
                auxiliary.constraints.multiply_row(i, -1f64);
                auxiliary.right_hand_side.multiply_row(i, -1f64);
            }
        }
        auxiliary.constraints.hcat(&DenseMatrix::identity(nr_artificial));

        let mut cost = DenseMatrix::zeros(first_artificial + nr_artificial, 1);
        for j in first_artificial..(first_artificial + nr_artificial) {
            cost.set_value(j, 0, -1f64);
        }
        auxiliary.cost = cost;
        auxiliary.constant = 0f64;

        auxiliary
    }

    /// Remove the given constraint rows from `A` and `b`.
    ///
    /// Used when phase one proves rows redundant; the removed rows must be linearly dependent on
    /// the remaining ones.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.iter().all(|&i| i < self.nr_constraints()));
        debug_assert!(rows.len() < self.nr_constraints());

        let keep = (0..self.nr_constraints())
            .filter(|i| !rows.contains(i))
            .collect::<Vec<_>>();
        self.constraints = self.constraints.take_rows(&keep);
        self.right_hand_side = self.right_hand_side.take_rows(&keep);
    }
}
