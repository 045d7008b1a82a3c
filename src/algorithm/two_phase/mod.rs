//! # The two phase simplex method
//!
//! Phase one finds a basic feasible solution by driving an auxiliary objective over artificial
//! variables to zero; phase two optimizes the real objective starting from that basis. The
//! iteration logic is shared between the phases, as described in chapter 2 of Combinatorial
//! Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
use log::debug;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_program::general_form::GeneralForm;
use crate::data::linear_program::standard_form::StandardForm;

pub mod basis;
pub mod strategy;

/// Solve a general form linear program with the two phase simplex method.
///
/// A pure, blocking, single threaded computation.
///
/// # Return value
///
/// A tagged outcome: the optimum in the variable space of `general_form`, or a proof marker that
/// the problem is infeasible or unbounded.
pub fn solve(general_form: GeneralForm) -> OptimizationResult {
    solve_with_tolerance(general_form, EPSILON)
}

/// Solve a general form linear program with an explicit zero tolerance.
pub fn solve_with_tolerance(general_form: GeneralForm, tolerance: f64) -> OptimizationResult {
    let mut standard_form = general_form.into_standard_form();

    let mut basis = match compute_bfs::<FirstProfitable>(&mut standard_form, tolerance) {
        Some(basis) => basis,
        None => return OptimizationResult::Infeasible,
    };

    match primal::<FirstProfitable>(&mut standard_form, &mut basis, tolerance) {
        SimplexOutcome::Optimal => {
            OptimizationResult::FiniteOptimum(standard_form.solution(&basis))
        },
        SimplexOutcome::Unbounded => OptimizationResult::Unbounded,
    }
}

/// The simplex iteration terminates in one of two ways; infeasibility is decided in phase one,
/// before the iteration runs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum SimplexOutcome {
    /// No column has a positive reduced cost; the current basis is final.
    Optimal,
    /// An entering column exists along which the objective grows without bound.
    Unbounded,
}

/// Compute a basic feasible solution: the first phase of the two phase method.
///
/// Runs the simplex iteration on the auxiliary problem, starting from the trivially feasible
/// all-artificial basis. Artificial variables that end up basic at zero level are pivoted out;
/// rows where that is impossible are redundant and get removed from `standard_form`.
///
/// # Return value
///
/// A basis of `standard_form` at which it is feasible, or `None` when the constraint system
/// admits no solution.
fn compute_bfs<PR: PivotRule>(
    standard_form: &mut StandardForm,
    tolerance: f64,
) -> Option<Vec<usize>> {
    let first_artificial = standard_form.nr_variables();
    let nr_artificial = standard_form.nr_constraints();

    let mut auxiliary = standard_form.auxiliary();
    let mut basis = (first_artificial..(first_artificial + nr_artificial)).collect::<Vec<_>>();

    if primal::<PR>(&mut auxiliary, &mut basis, tolerance) == SimplexOutcome::Unbounded {
        panic!("Artificial cost can not be unbounded.");
    }

    let solution = auxiliary.basic_solution(&basis);
    let feasible = (first_artificial..(first_artificial + nr_artificial))
        .all(|j| solution.get_value(j, 0).abs() <= tolerance);
    if !feasible {
        return None;
    }

    let redundant_rows =
        remove_artificial_basis_variables(&mut auxiliary, &mut basis, first_artificial, tolerance);
    if !redundant_rows.is_empty() {
        debug!("removing {} redundant constraint rows", redundant_rows.len());
        standard_form.remove_rows(&redundant_rows);
        basis = basis.into_iter()
            .enumerate()
            .filter(|(row, _)| !redundant_rows.contains(row))
            .map(|(_, column)| column)
            .collect();
    }
    debug_assert!(basis.iter().all(|&column| column < first_artificial));

    Some(basis)
}

/// Remove artificial variables from the basis by making basis changes "at zero level", without
/// change of cost of the current solution.
///
/// Every remaining artificial basis variable sits in a row at value zero (feasibility was already
/// established). It is replaced with a non-basic structural column that has reduced cost zero and
/// a nonzero coefficient in that row; when no such column exists the row is linearly dependent on
/// the other rows.
///
/// # Return value
///
/// The indices of redundant rows, in increasing order.
fn remove_artificial_basis_variables(
    auxiliary: &mut StandardForm,
    basis: &mut [usize],
    first_artificial: usize,
    tolerance: f64,
) -> Vec<usize> {
    let mut redundant_rows = Vec::new();

    for row in 0..basis.len() {
        if basis[row] < first_artificial {
            continue;
        }

        let replacement = (0..first_artificial)
            .filter(|column| !basis.contains(column))
            .filter(|&column| auxiliary.cost().get_value(column, 0).abs() <= tolerance)
            .find(|&column| auxiliary.constraints().get_value(row, column).abs() > tolerance);

        match replacement {
            Some(column) => {
                basis[row] = column;
                auxiliary.canonical_form(basis, tolerance);
            },
            None => redundant_rows.push(row),
        }
    }

    redundant_rows
}

/// Raise the objective of the basic feasible solution to the maximum: the simplex iteration.
///
/// Each round re-bases the problem into canonical form, asks the pivot rule for an entering
/// column and runs the ratio test for the leaving row. An explicit loop rather than recursion,
/// so that memory use is independent of the iteration count.
///
/// # Arguments
///
/// * `standard_form`: Problem to optimize; left in canonical form for the final basis.
/// * `basis`: A valid basis for `standard_form`, updated in place with every pivot.
fn primal<PR: PivotRule>(
    standard_form: &mut StandardForm,
    basis: &mut [usize],
    tolerance: f64,
) -> SimplexOutcome {
    let mut rule = PR::new();
    let mut iteration = 0_u64;

    loop {
        standard_form.canonical_form(basis, tolerance);
        debug!("iteration {}: objective value {}", iteration, standard_form.constant());

        let column = match rule.select_primal_pivot_column(standard_form.cost(), tolerance) {
            Some(column) => column,
            None => break SimplexOutcome::Optimal,
        };

        match select_primal_pivot_row(standard_form, column, tolerance) {
            Some(row) => basis[row] = column,
            None => break SimplexOutcome::Unbounded,
        }

        iteration += 1;
    }
}

/// Row selection rule for the primal Simplex method: the minimum ratio test.
///
/// Among the rows with a positive coefficient in the entering column, the one minimizing
/// `b[i] / A[i][column]` leaves the basis; ties are broken by the first occurrence in row order.
///
/// # Return value
///
/// `None` when no row has a positive coefficient, which proves the problem unbounded.
fn select_primal_pivot_row(
    standard_form: &StandardForm,
    column: usize,
    tolerance: f64,
) -> Option<usize> {
    let mut selected = None;
    let mut smallest_ratio = f64::INFINITY;

    for row in 0..standard_form.nr_constraints() {
        let coefficient = standard_form.constraints().get_value(row, column);
        if coefficient > tolerance {
            let ratio = standard_form.right_hand_side().get_value(row, 0) / coefficient;
            if ratio < smallest_ratio {
                smallest_ratio = ratio;
                selected = Some(row);
            }
        }
    }

    selected
}
