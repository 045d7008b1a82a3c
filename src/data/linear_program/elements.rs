//! # Building blocks to describe linear programs.

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Default for Objective {
    fn default() -> Self {
        Objective::Minimize
    }
}

/// A single linear constraint of a general form problem.
///
/// Owned by the linear program that declares it.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    /// One coefficient per structural variable.
    coefficients: Vec<f64>,
    constraint_type: ConstraintType,
    right_hand_side: f64,
}

impl Constraint {
    /// Create a new `Constraint`. A plain constructor.
    pub fn new(
        coefficients: Vec<f64>,
        constraint_type: ConstraintType,
        right_hand_side: f64,
    ) -> Self {
        debug_assert!(!coefficients.is_empty());

        Self { coefficients, constraint_type, right_hand_side }
    }

    /// The coefficients of the structural variables.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Whether this is an equality or one of the two inequality kinds.
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    /// The constant on the right-hand side.
    pub fn right_hand_side(&self) -> f64 {
        self.right_hand_side
    }
}
