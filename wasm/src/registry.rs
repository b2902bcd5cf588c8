//! Session-scoped list of saved results, one list per operation.

use std::collections::HashMap;
use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::digit::Combination;
use crate::error::PuzzleError;
use crate::operation::Operation;

/// Shown by the page when an operation has nothing saved.
pub const NO_SAVED_MESSAGE: &str = "No saved combinations";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A saved result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEntry {
    pub combination: Combination,
    pub goal: i64,
    /// Local time the entry was saved
    pub timestamp: String,
}

impl fmt::Display for SavedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.combination, self.goal)
    }
}

/// Saved results keyed by operation, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SavedRegistry {
    lists: HashMap<Operation, Vec<SavedEntry>>,
}

impl SavedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a result stamped with the current local time.
    pub fn save(
        &mut self,
        operation: Operation,
        combination: Combination,
        goal: i64,
    ) -> Result<(), PuzzleError> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.save_at(operation, combination, goal, timestamp)
    }

    /// Saves a result with an explicit timestamp. Fails with `AlreadySaved`
    /// and leaves the list untouched when the same combination and goal are
    /// already saved for this operation.
    pub fn save_at(
        &mut self,
        operation: Operation,
        combination: Combination,
        goal: i64,
        timestamp: String,
    ) -> Result<(), PuzzleError> {
        let list = self.lists.entry(operation).or_default();
        if list
            .iter()
            .any(|saved| saved.goal == goal && saved.combination == combination)
        {
            return Err(PuzzleError::AlreadySaved);
        }
        log::info!("saved {} {} = {}", operation, combination, goal);
        list.push(SavedEntry {
            combination,
            goal,
            timestamp,
        });
        Ok(())
    }

    /// Removes the entry at `index`. An index past the end is an error and
    /// changes nothing.
    pub fn delete(
        &mut self,
        operation: Operation,
        index: usize,
    ) -> Result<SavedEntry, PuzzleError> {
        let len = self.len(operation);
        match self.lists.get_mut(&operation) {
            Some(list) if index < len => {
                let removed = list.remove(index);
                log::info!("deleted {} {}", operation, removed);
                Ok(removed)
            }
            _ => Err(PuzzleError::IndexOutOfRange { index, len }),
        }
    }

    pub fn list(&self, operation: Operation) -> &[SavedEntry] {
        self.lists.get(&operation).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, operation: Operation) -> usize {
        self.list(operation).len()
    }

    pub fn is_empty(&self, operation: Operation) -> bool {
        self.list(operation).is_empty()
    }

    /// Number of entries across every operation.
    pub fn total(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }
}
