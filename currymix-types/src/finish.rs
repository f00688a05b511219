use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The two finishes an item can be prepared with.
///
/// `Veg` is the cheaper one; items nobody asks about get it by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Finish {
    #[serde(rename = "V")]
    Veg,
    #[serde(rename = "M")]
    Meat,
}

impl Finish {
    /// The finish assumed to cost less.
    pub const CHEAPEST: Finish = Finish::Veg;

    pub const ALL: [Finish; 2] = [Finish::Veg, Finish::Meat];

    /// One-character code used in input and output.
    pub fn code(self) -> char {
        match self {
            Finish::Veg => 'V',
            Finish::Meat => 'M',
        }
    }

    pub fn is_cheapest(self) -> bool {
        self == Self::CHEAPEST
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An input token that is not a known finish code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid finish code '{code}' (expected V or M)")]
pub struct FinishParseError {
    pub code: String,
}

impl FromStr for Finish {
    type Err = FinishParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "V" => Ok(Finish::Veg),
            "M" => Ok(Finish::Meat),
            other => Err(FinishParseError {
                code: other.to_string(),
            }),
        }
    }
}
