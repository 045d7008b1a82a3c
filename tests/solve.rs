//! End to end runs of the two phase simplex method through the public interface.
use assert_approx_eq::assert_approx_eq;

use rflp::algorithm::OptimizationResult;
use rflp::algorithm::two_phase::solve;
use rflp::data::linear_program::elements::{Constraint, ConstraintType, Objective};
use rflp::data::linear_program::general_form::GeneralForm;

#[test]
fn production_planning() {
    // max 3x1 + 2x2 + 5x3 with 2x1 + x2 + 3x3 <= 100 and x1 + 2x2 + x3 <= 80.
    let problem = GeneralForm::new(
        Objective::Maximize,
        vec![3f64, 2f64, 5f64],
        vec![
            Constraint::new(vec![2f64, 1f64, 3f64], ConstraintType::Less, 100f64),
            Constraint::new(vec![1f64, 2f64, 1f64], ConstraintType::Less, 80f64),
        ],
        vec![true, true, true],
    );

    match solve(problem) {
        OptimizationResult::FiniteOptimum(solution) => {
            // Vertex enumeration of this small instance puts the optimum at (0, 28, 24).
            assert_approx_eq!(solution.objective_value(), 176f64);
            assert_approx_eq!(solution.value(0), 0f64);
            assert_approx_eq!(solution.value(1), 28f64);
            assert_approx_eq!(solution.value(2), 24f64);
            assert_approx_eq!(
                2f64 * solution.value(0) + solution.value(1) + 3f64 * solution.value(2),
                100f64
            );
            assert_approx_eq!(
                solution.value(0) + 2f64 * solution.value(1) + solution.value(2),
                80f64
            );
        },
        other => panic!("expected a finite optimum, got {:?}", other),
    }
}

#[test]
fn diet_problem() {
    // min 2x + 3y with x + y >= 10 and x >= 2, a classic covering shape.
    let problem = GeneralForm::new(
        Objective::Minimize,
        vec![2f64, 3f64],
        vec![
            Constraint::new(vec![1f64, 1f64], ConstraintType::Greater, 10f64),
            Constraint::new(vec![1f64, 0f64], ConstraintType::Greater, 2f64),
        ],
        vec![true, true],
    );

    match solve(problem) {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_approx_eq!(solution.objective_value(), 20f64);
            assert_approx_eq!(solution.value(0), 10f64);
            assert_approx_eq!(solution.value(1), 0f64);
        },
        other => panic!("expected a finite optimum, got {:?}", other),
    }
}

#[test]
fn contradictory_bounds_are_infeasible() {
    let problem = GeneralForm::new(
        Objective::Minimize,
        vec![1f64, 1f64],
        vec![
            Constraint::new(vec![1f64, 1f64], ConstraintType::Greater, 3f64),
            Constraint::new(vec![1f64, 1f64], ConstraintType::Less, 1f64),
        ],
        vec![true, true],
    );

    assert_eq!(solve(problem), OptimizationResult::Infeasible);
}

#[test]
fn open_direction_is_unbounded() {
    // y is free and only bounded from one side.
    let problem = GeneralForm::new(
        Objective::Maximize,
        vec![0f64, 1f64],
        vec![Constraint::new(vec![1f64, -1f64], ConstraintType::Less, 1f64)],
        vec![true, false],
    );

    assert_eq!(solve(problem), OptimizationResult::Unbounded);
}
