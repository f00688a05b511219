use crate::finish::Finish;
use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionStatus {
    Feasible,
    Infeasible,
}

/// Machine-readable form of an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub schema: String,
    pub status: SolutionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finishes: Option<Vec<Finish>>,
}

impl SolutionReport {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let (status, finishes) = match outcome {
            Outcome::Feasible(a) => (SolutionStatus::Feasible, Some(a.finishes().to_vec())),
            Outcome::Infeasible(_) => (SolutionStatus::Infeasible, None),
        };
        Self {
            schema: crate::schema::CURRYMIX_SOLUTION_V1.to_string(),
            status,
            finishes,
        }
    }
}
