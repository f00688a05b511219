use currymix_types::{Assignment, Customer};
use thiserror::Error;

/// A customer left without any of its wishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("customer {customer} has no preference met by the assignment")]
pub struct Violation {
    /// Position of the customer in the input order (0-based).
    pub customer: usize,
}

/// Check an assignment against every customer, independently of how it was produced.
///
/// A preference naming an item outside the assignment never counts as met.
pub fn verify(assignment: &Assignment, customers: &[Customer]) -> Result<(), Violation> {
    for (position, customer) in customers.iter().enumerate() {
        let met = customer
            .preferences()
            .iter()
            .any(|pref| assignment.finish_of(pref.item) == Some(pref.finish));
        if !met {
            return Err(Violation { customer: position });
        }
    }
    Ok(())
}
