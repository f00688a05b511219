//! Shared value types for the currymix workspace.
//!
//! # Design constraints
//! - Parsed inputs (`Order`, `Customer`, `Preference`) are immutable once built.
//! - `Outcome` is what the solver hands back; only renderers turn it into text.
//! - `report` types are serialized to disk/stdout. Be conservative with breaking changes.

pub mod finish;
pub mod order;
pub mod outcome;
pub mod report;

pub use finish::{Finish, FinishParseError};
pub use order::{Customer, EmptyCustomer, ItemId, Order, Preference};
pub use outcome::{Assignment, BlockedReason, Infeasibility, Outcome};

/// Schema identifiers.
pub mod schema {
    pub const CURRYMIX_SOLUTION_V1: &str = "currymix.solution.v1";
}
