//! Digits, combinations and their sorted identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

/// Digits a combination may draw from, in generation order.
pub const DIGIT_POOL: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

pub fn is_digit(value: u8) -> bool {
    (1..=9).contains(&value)
}

/// Canonical identity of a digit multiset: its digits in ascending order.
///
/// Two arrangements of the same digits produce equal keys, which is what the
/// finder deduplicates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortedKey(Vec<u8>);

impl SortedKey {
    pub fn of(digits: &[u8]) -> Self {
        let mut sorted = digits.to_vec();
        sorted.sort_unstable();
        SortedKey(sorted)
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for SortedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", joined.join(","))
    }
}

/// A digit multiset, always held in ascending order.
///
/// Serializes as a plain array so the page script receives `[1, 4]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Combination(Vec<u8>);

impl Combination {
    /// Builds a combination from digits in any order, rejecting anything
    /// outside 1..=9.
    pub fn new(digits: Vec<u8>) -> Result<Self, PuzzleError> {
        if let Some(bad) = digits.iter().find(|d| !is_digit(**d)) {
            return Err(PuzzleError::InvalidInput(format!(
                "{} is not a digit between 1 and 9",
                bad
            )));
        }
        Ok(Self::from_key(SortedKey::of(&digits)))
    }

    pub(crate) fn from_key(key: SortedKey) -> Self {
        Combination(key.0)
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn key(&self) -> SortedKey {
        SortedKey(self.0.clone())
    }
}

impl TryFrom<Vec<u8>> for Combination {
    type Error = PuzzleError;

    fn try_from(digits: Vec<u8>) -> Result<Self, Self::Error> {
        Combination::new(digits)
    }
}

impl From<Combination> for Vec<u8> {
    fn from(combination: Combination) -> Self {
        combination.0
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", joined.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_order() {
        assert_eq!(SortedKey::of(&[4, 1, 3]), SortedKey::of(&[3, 4, 1]));
        assert_eq!(SortedKey::of(&[4, 1, 3]).to_string(), "1,3,4");
    }

    #[test]
    fn combination_sorts_on_construction() {
        let combo = Combination::new(vec![9, 2, 2]).unwrap();
        assert_eq!(combo.digits(), &[2, 2, 9]);
        assert_eq!(combo.to_string(), "[2, 2, 9]");
    }

    #[test]
    fn combination_rejects_non_digits() {
        assert!(matches!(
            Combination::new(vec![0, 3]),
            Err(PuzzleError::InvalidInput(_))
        ));
        assert!(Combination::new(vec![10]).is_err());
    }

    #[test]
    fn combination_json_is_a_plain_array() {
        let combo: Combination = serde_json::from_str("[6, 1]").unwrap();
        assert_eq!(combo.digits(), &[1, 6]);
        assert_eq!(serde_json::to_string(&combo).unwrap(), "[1,6]");
        assert!(serde_json::from_str::<Combination>("[0, 1]").is_err());
    }
}
