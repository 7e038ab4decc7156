//! # An incremental linear constraint solver.
//!
//! Systems of weighted linear equalities and inequalities over real-valued
//! variables are solved with the Cassowary algorithm, as described in "The
//! Cassowary Linear Arithmetic Constraint Solving Algorithm" by Badros,
//! Borning and Stuckey. Required constraints hold exactly; the violations of
//! all other constraints are minimized under a strict strength hierarchy,
//! and solutions are maintained incrementally as constraints are added,
//! removed or edited.
//!
//! ```
//! use strut::{strength, RelationalOperator, Solver, Variable};
//!
//! let left = Variable::named("left");
//! let width = Variable::named("width");
//! let right = Variable::named("right");
//!
//! let mut solver = Solver::new();
//! solver.add_constraint(&solver.create_constraint(
//!     left.clone() + width.clone(),
//!     RelationalOperator::Equal,
//!     right.clone(),
//!     strength::REQUIRED,
//! ))?;
//! solver.add_edit_variable(&left, strength::STRONG)?;
//! solver.add_edit_variable(&width, strength::STRONG)?;
//!
//! solver.suggest_value(&left, 100f64)?;
//! solver.suggest_value(&width, 400f64)?;
//! solver.update_variables();
//! assert_eq!(right.value(), 500f64);
//! # Ok::<(), strut::SolverError>(())
//! ```
pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;

pub use crate::algorithm::simplex::solver::Solver;
pub use crate::algorithm::SolverError;
pub use crate::data::constraint_system::constraint::{Constraint, RelationalOperator};
pub use crate::data::constraint_system::expression::{Expression, Term};
pub use crate::data::constraint_system::strength;
pub use crate::data::constraint_system::variable::Variable;
