//! # Building blocks to describe systems of linear constraints
//!
//! A constraint system is assembled from [`Variable`]s combined into linear
//! [`Expression`]s, which are paired with a [`RelationalOperator`] and a
//! strength to form [`Constraint`]s. All of these are plain values: they can
//! be built up front, cloned freely and submitted to any number of solvers.
pub mod constraint;
pub mod expression;
pub mod strength;
pub mod variable;

pub use constraint::{Constraint, RelationalOperator};
pub use expression::{Expression, Term};
pub use variable::Variable;
