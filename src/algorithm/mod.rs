//! # Algorithms
//!
//! The incremental simplex core and the errors its public operations can
//! raise. Every error is terminal for the call raising it: the tableau is
//! left observably unchanged, except that symbols interned for variables
//! first mentioned by a failing constraint may linger in the variable map.
use thiserror::Error;

use crate::data::constraint_system::constraint::Constraint;
use crate::data::constraint_system::variable::Variable;

pub mod simplex;

/// A failure of a solver operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The constraint was already added to the solver.
    #[error("constraint already present: {0}")]
    DuplicateConstraint(Constraint),
    /// The constraint to remove was never added to the solver (or was
    /// already removed).
    #[error("constraint not present: {0}")]
    UnknownConstraint(Constraint),
    /// No assignment satisfies the constraint together with everything
    /// already in the solver.
    #[error("constraint cannot be satisfied: {0}")]
    UnsatisfiableConstraint(Constraint),
    /// The variable is already registered for editing.
    #[error("edit variable already present: {0}")]
    DuplicateEditVariable(Variable),
    /// The variable was never registered for editing.
    #[error("edit variable not present: {0}")]
    UnknownEditVariable(Variable),
    /// Edit variables must be weaker than required, otherwise suggesting an
    /// unattainable value would make the whole system infeasible.
    #[error("edit variables may not be required")]
    BadRequiredStrength,
    /// The tableau reached a state that the algorithm's invariants rule out.
    ///
    /// Seeing this error indicates a bug in the solver or an input that
    /// violated a documented precondition.
    #[error("internal solver error: {0}")]
    Internal(&'static str),
    /// Optimization did not terminate within the configured pivot budget.
    ///
    /// The ceiling is a safety valve against cycling on pathological inputs;
    /// see [`Solver::set_max_iterations`](crate::Solver::set_max_iterations).
    #[error("optimization exceeded the ceiling of {0} pivots")]
    IterationLimitExceeded(usize),
}
