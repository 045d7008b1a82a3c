//! # General form linear programs
//!
//! The representation a problem is built in: an objective direction, a cost vector, an ordered
//! list of (in)equality constraints and a non-negativity flag per variable.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::{Constraint, ConstraintType, Objective};
use crate::data::linear_program::standard_form::StandardForm;

/// A linear program in general form.
///
/// Variables flagged non-negative are restricted to values `>= 0`; the others are free.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneralForm {
    objective: Objective,
    /// One cost coefficient per structural variable.
    cost: Vec<f64>,
    constraints: Vec<Constraint>,
    /// Whether the variable at each position is restricted to be non-negative.
    non_negative: Vec<bool>,
}

impl GeneralForm {
    /// Create a new `GeneralForm` from an in-memory problem description.
    ///
    /// # Arguments
    ///
    /// * `objective`: Direction of optimization.
    /// * `cost`: Objective coefficients, one per variable.
    /// * `constraints`: Ordered constraints, each with as many coefficients as there are
    /// variables. At least one constraint is required.
    /// * `non_negative`: Per-variable non-negativity flags, one per variable.
    pub fn new(
        objective: Objective,
        cost: Vec<f64>,
        constraints: Vec<Constraint>,
        non_negative: Vec<bool>,
    ) -> Self {
        debug_assert!(!cost.is_empty());
        debug_assert!(!constraints.is_empty());
        debug_assert_eq!(cost.len(), non_negative.len());
        debug_assert!(constraints.iter().all(|c| c.coefficients().len() == cost.len()));

        Self { objective, cost, constraints, non_negative }
    }

    /// The number of structural variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// The number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// The number of variables not restricted to be non-negative.
    pub fn nr_free_variables(&self) -> usize {
        self.non_negative.iter().filter(|&&non_negative| !non_negative).count()
    }

    /// Convert this problem into standard equality form: `max c'x, Ax = b, x >= 0`.
    ///
    /// A minimization objective is negated (`min f == max -f`). Each free variable `x` is split
    /// into two non-negative variables with `x = x⁺ - x⁻`; the negated twin column directly
    /// follows the original column in the objective and in every constraint. Each inequality gets
    /// one slack column after all structural columns, in constraint order: `+1` for a `Less`
    /// constraint, `-1` for a `Greater` constraint.
    ///
    /// The conversion is destructive, which this method expresses by consuming the general form.
    pub fn into_standard_form(self) -> StandardForm {
        let nr_inequalities = self.constraints.iter()
            .filter(|constraint| constraint.constraint_type() != ConstraintType::Equal)
            .count();
        let nr_standard_variables =
            self.nr_variables() + self.nr_free_variables() + nr_inequalities;

        let sign = match self.objective {
            Objective::Maximize => 1f64,
            Objective::Minimize => -1f64,
        };

        let mut cost = DenseMatrix::zeros(nr_standard_variables, 1);
        let mut constraints = DenseMatrix::zeros(self.nr_constraints(), nr_standard_variables);
        let mut right_hand_side = DenseMatrix::zeros(self.nr_constraints(), 1);

        let mut column = 0;
        for (variable, &non_negative) in self.non_negative.iter().enumerate() {
            cost.set_value(column, 0, sign * self.cost[variable]);
            for (i, constraint) in self.constraints.iter().enumerate() {
                constraints.set_value(i, column, constraint.coefficients()[variable]);
            }

            if !non_negative {
                column += 1;
                cost.set_value(column, 0, -sign * self.cost[variable]);
                for (i, constraint) in self.constraints.iter().enumerate() {
                    constraints.set_value(i, column, -constraint.coefficients()[variable]);
                }
            }

            column += 1;
        }

        for (i, constraint) in self.constraints.iter().enumerate() {
            right_hand_side.set_value(i, 0, constraint.right_hand_side());
            match constraint.constraint_type() {
                ConstraintType::Less => {
                    constraints.set_value(i, column, 1f64);
                    column += 1;
                },
                ConstraintType::Greater => {
                    constraints.set_value(i, column, -1f64);
                    column += 1;
                },
                ConstraintType::Equal => (),
            }
        }
        debug_assert_eq!(column, nr_standard_variables);

        StandardForm::new(
            constraints,
            right_hand_side,
            cost,
            0f64,
            self.objective,
            self.non_negative,
        )
    }
}
