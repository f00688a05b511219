//! Rendering helpers: the one-line text answer and the JSON report.

use anyhow::Context;
use currymix_types::Outcome;
use currymix_types::report::SolutionReport;

/// Printed instead of an assignment when the order cannot be satisfied.
pub const NO_SOLUTION_EXISTS: &str = "No solution exists";

/// `V V M` style: one code per item in id order, or [`NO_SOLUTION_EXISTS`].
pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Feasible(assignment) => assignment
            .finishes()
            .iter()
            .map(|f| f.code().to_string())
            .collect::<Vec<_>>()
            .join(" "),
        Outcome::Infeasible(_) => NO_SOLUTION_EXISTS.to_string(),
    }
}

pub fn render_json(outcome: &Outcome) -> anyhow::Result<String> {
    let report = SolutionReport::from_outcome(outcome);
    serde_json::to_string_pretty(&report).context("serialize solution report")
}
