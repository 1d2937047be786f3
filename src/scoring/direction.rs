//! Optimization direction

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether higher or lower raw scores are better
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Higher raw scores are better
    Maximize,
    /// Lower raw scores are better
    Minimize,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Maximize, Direction::Minimize];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Maximize => "maximize",
            Direction::Minimize => "minimize",
        }
    }

    /// Multiplier that turns a raw score into a "higher is better" score
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Maximize => 1.0,
            Direction::Minimize => -1.0,
        }
    }

    pub fn greater_is_better(&self) -> bool {
        matches!(self, Direction::Maximize)
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "maximize" => Ok(Direction::Maximize),
            "minimize" => Ok(Direction::Minimize),
            other => Err(Error::InvalidArgument(format!(
                "direction must be either 'maximize' or 'minimize', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
