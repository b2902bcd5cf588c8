//! Brute-force search for digit multisets that reach a goal.

use std::collections::HashSet;

use crate::arrangement::Arrangements;
use crate::digit::{Combination, SortedKey, DIGIT_POOL};
use crate::error::PuzzleError;
use crate::operation::Operation;

/// Smallest digit count a search accepts.
pub const MIN_DIGITS: usize = 2;

/// Finds every digit multiset of size `digit_count` that reaches `goal`.
///
/// Candidates come from arrangements of 1..=9 (with or without repeated
/// digits) and are reported once per multiset, sorted ascending, in the order
/// the first winning arrangement was generated. For subtract and divide a
/// multiset wins when any length-k sequence drawn from its digits, with
/// repetition, reaches the goal.
pub fn find(
    operation: Operation,
    goal: i64,
    digit_count: usize,
    allow_repeats: bool,
) -> Result<Vec<Combination>, PuzzleError> {
    if digit_count < MIN_DIGITS {
        return Err(PuzzleError::invalid_request());
    }

    let mut seen: HashSet<SortedKey> = HashSet::new();
    let mut found = Vec::new();
    let mut examined = 0usize;

    for arrangement in Arrangements::new(&DIGIT_POOL, digit_count, allow_repeats) {
        examined += 1;
        let key = SortedKey::of(&arrangement);
        if seen.contains(&key) {
            continue;
        }
        let accepted = if operation.order_matters() {
            any_ordering_reaches(operation, key.digits(), goal)
        } else {
            operation.evaluates_to(&arrangement, goal)
        };
        seen.insert(key.clone());
        if accepted {
            found.push(Combination::from_key(key));
        }
    }

    log::debug!(
        "{} goal={} digits={} repeats={}: {} combination(s) from {} arrangement(s)",
        operation,
        goal,
        digit_count,
        allow_repeats,
        found.len(),
        examined
    );
    Ok(found)
}

/// Heading the page shows above a result list.
pub fn results_headline(count: usize, goal: i64) -> String {
    if count == 0 {
        "No valid combinations found".to_string()
    } else {
        format!("Found {} combination(s) for {}:", count, goal)
    }
}

/// Tries every length-k sequence drawn from these digits, reusing any of
/// them at every position.
fn any_ordering_reaches(operation: Operation, digits: &[u8], goal: i64) -> bool {
    Arrangements::new(digits, digits.len(), true)
        .any(|ordering| operation.evaluates_to(&ordering, goal))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_of(found: &[Combination]) -> Vec<Vec<u8>> {
        found.iter().map(|c| c.digits().to_vec()).collect()
    }

    #[test]
    fn add_five_with_two_digits() {
        let found = digits_of(&find(Operation::Add, 5, 2, false).unwrap());
        assert_eq!(found, vec![vec![1, 4], vec![2, 3]]);
    }

    #[test]
    fn add_with_repeats_allows_doubles() {
        let found = digits_of(&find(Operation::Add, 10, 2, true).unwrap());
        assert!(found.contains(&vec![5, 5]));
        assert!(!digits_of(&find(Operation::Add, 10, 2, false).unwrap()).contains(&vec![5, 5]));
    }

    #[test]
    fn multiply_six() {
        let found = digits_of(&find(Operation::Multiply, 6, 2, false).unwrap());
        assert_eq!(found, vec![vec![1, 6], vec![2, 3]]);
    }

    #[test]
    fn subtract_three_is_sorted() {
        let found = digits_of(&find(Operation::Subtract, 3, 2, false).unwrap());
        assert_eq!(found.first(), Some(&vec![1, 4]));
        assert_eq!(found.len(), 6);
    }

    #[test]
    fn subtract_negative_goal() {
        let found = digits_of(&find(Operation::Subtract, -4, 3, false).unwrap());
        assert!(found.contains(&vec![1, 2, 3]));
    }

    #[test]
    fn subtract_orderings_may_reuse_a_digit() {
        // 1 - 1 - 1
        let found = digits_of(&find(Operation::Subtract, -1, 3, false).unwrap());
        assert!(found.contains(&vec![1, 2, 3]));
    }

    #[test]
    fn divide_by_itself_makes_every_pair_one() {
        let found = find(Operation::Divide, 1, 2, false).unwrap();
        assert_eq!(found.len(), 36);
    }

    #[test]
    fn divide_with_repeats_reuses_a_digit() {
        // 2 / 1 / 1
        let found = digits_of(&find(Operation::Divide, 2, 3, true).unwrap());
        assert!(found.contains(&vec![1, 2, 9]));
        let found = digits_of(&find(Operation::Divide, 2, 3, false).unwrap());
        assert!(found.contains(&vec![1, 2, 9]));
    }

    #[test]
    fn divide_two() {
        let found = digits_of(&find(Operation::Divide, 2, 2, false).unwrap());
        assert_eq!(found, vec![vec![1, 2], vec![2, 4], vec![3, 6], vec![4, 8]]);
    }

    #[test]
    fn unreachable_goal_is_empty() {
        assert!(find(Operation::Add, 100, 2, false).unwrap().is_empty());
    }

    #[test]
    fn too_few_digits_is_rejected() {
        assert!(matches!(
            find(Operation::Add, 5, 1, false),
            Err(PuzzleError::InvalidInput(_))
        ));
    }

    #[test]
    fn more_than_nine_without_repeats_is_empty() {
        assert!(find(Operation::Add, 45, 10, false).unwrap().is_empty());
    }

    #[test]
    fn all_nine_digits_sum_once() {
        let found = digits_of(&find(Operation::Add, 45, 9, false).unwrap());
        assert_eq!(found, vec![(1..=9).collect::<Vec<u8>>()]);
    }

    #[test]
    fn headline_reports_count() {
        assert_eq!(results_headline(2, 5), "Found 2 combination(s) for 5:");
        assert_eq!(results_headline(0, 100), "No valid combinations found");
    }

    #[test]
    fn results_keep_first_acceptance_order() {
        // 1+8 is generated before 2+7, 3+6, 4+5
        let found = digits_of(&find(Operation::Add, 9, 2, false).unwrap());
        assert_eq!(found, vec![vec![1, 8], vec![2, 7], vec![3, 6], vec![4, 5]]);
    }
}
