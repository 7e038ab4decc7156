//! # Data structures to describe constraint systems
//!
//! The types in this module are the user-facing half of the crate: variables,
//! linear expressions over them, constraints pairing an expression with a
//! relational operator and a strength, and the insertion-ordered map the
//! solver uses as its storage primitive throughout.
pub mod constraint_system;
pub mod indexed_map;
