//! Search parameters as they arrive from the page.

use serde::{Deserialize, Serialize};

use crate::digit::Combination;
use crate::error::PuzzleError;
use crate::finder::{self, MIN_DIGITS};
use crate::operation::Operation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub operation: Operation,
    pub goal: i64,
    pub digits: usize,
    #[serde(default)]
    pub allow_repeats: bool,
}

impl SearchRequest {
    /// Builds a request from raw form fields.
    ///
    /// The goal must be a non-zero integer and the digit count an integer of
    /// at least two; anything else is rejected with the message the page
    /// shows the user.
    pub fn from_form(
        operation: &str,
        goal: &str,
        digits: &str,
        allow_repeats: bool,
    ) -> Result<Self, PuzzleError> {
        let operation = operation.parse::<Operation>()?;
        let goal = goal
            .trim()
            .parse::<i64>()
            .map_err(|_| PuzzleError::invalid_request())?;
        let digits = digits
            .trim()
            .parse::<usize>()
            .map_err(|_| PuzzleError::invalid_request())?;
        let request = SearchRequest {
            operation,
            goal,
            digits,
            allow_repeats,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        let request: SearchRequest = serde_json::from_str(json)?;
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.goal == 0 || self.digits < MIN_DIGITS {
            return Err(PuzzleError::invalid_request());
        }
        Ok(())
    }

    pub fn run(&self) -> Result<Vec<Combination>, PuzzleError> {
        self.validate()?;
        finder::find(self.operation, self.goal, self.digits, self.allow_repeats)
    }
}
