//! # End-to-end scenarios exercised through the public surface
//!
//! All code in this module could be written by an external user of the
//! crate: constraints go in through [`Solver`](crate::Solver) and results
//! come back out through [`Variable::value`](crate::Variable::value).
mod editing;
mod properties;
