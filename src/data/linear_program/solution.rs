//! # Representation of feasible solutions
//!
//! Once a linear program is fully solved, a solution is derived. It is expressed in the variable
//! space of the general form problem the caller provided, with split free variables folded back
//! together.

/// An optimal solution to a linear program.
///
/// This struct would typically be handed to a presentation layer to display to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Value of the objective function for this solution, in the original optimization direction.
    objective_value: f64,
    /// One value per variable of the original problem, indexed by variable position.
    values: Vec<f64>,
}

impl Solution {
    /// Create a new `Solution` instance. A plain constructor.
    pub fn new(objective_value: f64, values: Vec<f64>) -> Self {
        Self { objective_value, values }
    }

    /// Value of the objective function at this solution.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Value of the variable at position `variable` in the original problem.
    pub fn value(&self, variable: usize) -> f64 {
        debug_assert!(variable < self.values.len());

        self.values[variable]
    }

    /// All variable values, indexed by original variable position.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
