//! Edit variables and value suggestions.
use approx::assert_abs_diff_eq;

use crate::data::constraint_system::strength;
use crate::{Constraint, RelationalOperator, Solver, SolverError, Variable};

#[test]
fn width_arithmetic_follows_suggestions() {
    let left = Variable::named("left");
    let width = Variable::named("width");
    let right = Variable::named("right");
    let mut solver = Solver::new();

    solver
        .add_constraint(&Constraint::new(
            right.clone() - left.clone() - width.clone(),
            RelationalOperator::Equal,
            strength::REQUIRED,
        ))
        .unwrap();
    solver.add_edit_variable(&left, strength::STRONG).unwrap();
    solver.add_edit_variable(&width, strength::STRONG).unwrap();

    solver.suggest_value(&left, 100f64).unwrap();
    solver.suggest_value(&width, 400f64).unwrap();
    solver.update_variables();
    assert_eq!(right.value(), 500f64);

    solver.suggest_value(&left, 200f64).unwrap();
    solver.suggest_value(&width, 600f64).unwrap();
    solver.update_variables();
    assert_eq!(right.value(), 800f64);
}

#[test]
fn center_follows_suggestions() {
    let left = Variable::named("left");
    let width = Variable::named("width");
    let center_x = Variable::named("centerX");
    let mut solver = Solver::new();

    solver
        .add_constraint(&Constraint::new(
            left.clone() + width.clone() * 0.5 - center_x.clone(),
            RelationalOperator::Equal,
            strength::REQUIRED,
        ))
        .unwrap();
    solver.add_edit_variable(&left, strength::STRONG).unwrap();
    solver.add_edit_variable(&width, strength::STRONG).unwrap();

    solver.suggest_value(&left, 0f64).unwrap();
    solver.suggest_value(&width, 500f64).unwrap();
    solver.update_variables();
    assert_eq!(center_x.value(), 250f64);
}

#[test]
fn suggestions_round_trip_without_competition() {
    let v = Variable::named("v");
    let mut solver = Solver::new();
    solver.add_edit_variable(&v, strength::STRONG).unwrap();

    for target in [0f64, 123.456, -42f64, 1e9, -0.5] {
        solver.suggest_value(&v, target).unwrap();
        solver.update_variables();
        assert_abs_diff_eq!(v.value(), target, epsilon = 1e-8);
    }
}

#[test]
fn strong_suggestion_beats_weak_goal() {
    let x = Variable::named("x");
    let mut solver = Solver::new();

    solver
        .add_constraint(&Constraint::with_rhs(
            x.clone(),
            RelationalOperator::Equal,
            10f64,
            strength::WEAK,
        ))
        .unwrap();
    solver.add_edit_variable(&x, strength::STRONG).unwrap();
    solver.suggest_value(&x, 5f64).unwrap();

    solver.update_variables();
    assert_abs_diff_eq!(x.value(), 5f64, epsilon = 1e-8);
}

#[test]
fn required_constraints_cap_suggestions() {
    let x = Variable::named("x");
    let mut solver = Solver::new();

    solver
        .add_constraint(&Constraint::with_rhs(
            x.clone(),
            RelationalOperator::LessOrEqual,
            100f64,
            strength::REQUIRED,
        ))
        .unwrap();
    solver.add_edit_variable(&x, strength::STRONG).unwrap();

    solver.suggest_value(&x, 300f64).unwrap();
    solver.update_variables();
    assert_abs_diff_eq!(x.value(), 100f64, epsilon = 1e-8);

    // Feasible suggestions are honored exactly again.
    solver.suggest_value(&x, 50f64).unwrap();
    solver.update_variables();
    assert_abs_diff_eq!(x.value(), 50f64, epsilon = 1e-8);
}

#[test]
fn edit_registration_is_validated() {
    let v = Variable::named("v");
    let w = Variable::named("w");
    let mut solver = Solver::new();

    assert_eq!(
        solver.add_edit_variable(&v, strength::REQUIRED),
        Err(SolverError::BadRequiredStrength),
    );
    // Clipping happens before the check, so an over-required strength is
    // rejected the same way.
    assert_eq!(
        solver.add_edit_variable(&v, strength::REQUIRED * 2f64),
        Err(SolverError::BadRequiredStrength),
    );

    solver.add_edit_variable(&v, strength::MEDIUM).unwrap();
    assert!(solver.has_edit_variable(&v));
    assert_eq!(
        solver.add_edit_variable(&v, strength::STRONG),
        Err(SolverError::DuplicateEditVariable(v.clone())),
    );

    assert!(!solver.has_edit_variable(&w));
    assert_eq!(
        solver.suggest_value(&w, 1f64),
        Err(SolverError::UnknownEditVariable(w.clone())),
    );
    assert_eq!(
        solver.remove_edit_variable(&w),
        Err(SolverError::UnknownEditVariable(w)),
    );
}

#[test]
fn removed_edit_variable_releases_its_goal() {
    let x = Variable::named("x");
    let mut solver = Solver::new();

    solver
        .add_constraint(&Constraint::with_rhs(
            x.clone(),
            RelationalOperator::Equal,
            10f64,
            strength::WEAK,
        ))
        .unwrap();
    solver.add_edit_variable(&x, strength::STRONG).unwrap();
    solver.suggest_value(&x, 5f64).unwrap();
    solver.update_variables();
    assert_abs_diff_eq!(x.value(), 5f64, epsilon = 1e-8);

    solver.remove_edit_variable(&x).unwrap();
    assert!(!solver.has_edit_variable(&x));
    solver.update_variables();
    assert_abs_diff_eq!(x.value(), 10f64, epsilon = 1e-8);

    assert_eq!(
        solver.suggest_value(&x, 1f64),
        Err(SolverError::UnknownEditVariable(x)),
    );
}
