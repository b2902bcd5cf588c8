//! The four arithmetic operations and how a digit sequence is scored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

/// Allowed distance between a left-to-right quotient and the goal.
pub const DIVIDE_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Whether rearranging the digits can change the result.
    pub fn order_matters(self) -> bool {
        matches!(self, Operation::Subtract | Operation::Divide)
    }

    /// Checks one concrete arrangement against the goal, folding left to
    /// right. Empty sequences never match.
    pub fn evaluates_to(self, digits: &[u8], goal: i64) -> bool {
        let Some((&first, rest)) = digits.split_first() else {
            return false;
        };
        match self {
            Operation::Add => digits.iter().map(|&d| i64::from(d)).sum::<i64>() == goal,
            Operation::Multiply => digits.iter().map(|&d| i64::from(d)).product::<i64>() == goal,
            Operation::Subtract => {
                rest.iter().fold(i64::from(first), |acc, &d| acc - i64::from(d)) == goal
            }
            Operation::Divide => {
                if rest.contains(&0) {
                    return false;
                }
                let quotient = rest
                    .iter()
                    .fold(f64::from(first), |acc, &d| acc / f64::from(d));
                (quotient - goal as f64).abs() < DIVIDE_TOLERANCE
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PuzzleError::InvalidInput(format!("unknown operation '{}'", wanted)))
    }
}
