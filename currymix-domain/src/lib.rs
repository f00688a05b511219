//! Domain logic: turn a parsed order into a finish assignment.
//!
//! This crate owns *what* each item gets and why. It does not read files or print anything;
//! that's `currymix-input`, `currymix-render` and the CLI.

mod solver;
mod verify;

pub use solver::{solve, solve_order};
pub use verify::{Violation, verify};
