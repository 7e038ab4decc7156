//! Randomized properties of the public surface.
use proptest::prelude::*;

use crate::data::constraint_system::strength;
use crate::{Constraint, RelationalOperator, Solver, Variable};

proptest! {
    /// A lone edit variable reproduces any finite suggestion exactly.
    #[test]
    fn suggestions_round_trip(targets in proptest::collection::vec(-1e6f64..1e6f64, 1..6)) {
        let v = Variable::named("v");
        let mut solver = Solver::new();
        solver.add_edit_variable(&v, strength::STRONG).unwrap();

        for target in targets {
            solver.suggest_value(&v, target).unwrap();
            solver.update_variables();
            prop_assert!((v.value() - target).abs() < 1e-6);
        }
    }

    /// Conflicting goals on one variable resolve to the strongest.
    #[test]
    fn stronger_goal_wins(
        strong_target in -100f64..100f64,
        medium_target in -100f64..100f64,
        weak_target in -100f64..100f64,
    ) {
        let x = Variable::named("x");
        let mut solver = Solver::new();
        solver.add_constraint(&Constraint::with_rhs(
            x.clone(),
            RelationalOperator::Equal,
            weak_target,
            strength::WEAK,
        )).unwrap();
        solver.add_constraint(&Constraint::with_rhs(
            x.clone(),
            RelationalOperator::Equal,
            medium_target,
            strength::MEDIUM,
        )).unwrap();
        solver.update_variables();
        prop_assert!((x.value() - medium_target).abs() < 1e-6);

        solver.add_constraint(&Constraint::with_rhs(
            x.clone(),
            RelationalOperator::Equal,
            strong_target,
            strength::STRONG,
        )).unwrap();
        solver.update_variables();
        prop_assert!((x.value() - strong_target).abs() < 1e-6);
    }

    /// Every required constraint still installed holds at the published
    /// values, whatever mix of additions succeeded.
    #[test]
    fn required_constraints_hold_at_published_values(
        specs in proptest::collection::vec(
            (0..3usize, 0..3usize, -50i32..50, 0..4usize, 0..3usize),
            1..10,
        ),
    ) {
        let variables = [
            Variable::named("a"),
            Variable::named("b"),
            Variable::named("c"),
        ];
        let strengths = [
            strength::WEAK,
            strength::MEDIUM,
            strength::STRONG,
            strength::REQUIRED,
        ];
        let mut solver = Solver::new();
        let mut required = Vec::new();

        for (i, j, constant, level, op_index) in specs {
            let op = match op_index {
                0 => RelationalOperator::LessOrEqual,
                1 => RelationalOperator::GreaterOrEqual,
                _ => RelationalOperator::Equal,
            };
            let constraint = Constraint::with_rhs(
                variables[i].clone() - variables[j].clone() * 2f64,
                op,
                f64::from(constant),
                strengths[level],
            );
            if solver.add_constraint(&constraint).is_ok()
                && constraint.strength() == strength::REQUIRED
            {
                required.push(constraint);
            }
        }

        solver.update_variables();
        for constraint in required {
            let value = constraint.expression().value();
            match constraint.op() {
                RelationalOperator::LessOrEqual => prop_assert!(value <= 1e-6),
                RelationalOperator::GreaterOrEqual => prop_assert!(value >= -1e-6),
                RelationalOperator::Equal => prop_assert!(value.abs() <= 1e-6),
            }
        }
    }
}
