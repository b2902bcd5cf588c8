//! Lazy generation of fixed-length arrangements drawn from a pool.

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Running,
    Done,
}

/// Iterates every length-`len` sequence drawn from `pool`, in lexicographic
/// order of pool positions.
///
/// Without repeats each pool position is used at most once per sequence, so
/// duplicate values in the pool still yield distinct (possibly equal-looking)
/// sequences. With repeats every position draws from the whole pool
/// independently. A length longer than the pool without repeats yields
/// nothing.
pub struct Arrangements<'a, T> {
    pool: &'a [T],
    len: usize,
    repeats: bool,
    cursor: Vec<usize>,
    used: Vec<bool>,
    phase: Phase,
}

impl<'a, T: Clone> Arrangements<'a, T> {
    pub fn new(pool: &'a [T], len: usize, repeats: bool) -> Self {
        Self {
            pool,
            len,
            repeats,
            cursor: vec![0; len],
            used: vec![false; pool.len()],
            phase: Phase::Fresh,
        }
    }

    fn next_free(&self, from: usize) -> Option<usize> {
        (from..self.pool.len()).find(|&i| self.repeats || !self.used[i])
    }

    fn take(&mut self, pos: usize, index: usize) {
        self.cursor[pos] = index;
        if !self.repeats {
            self.used[index] = true;
        }
    }

    fn release(&mut self, pos: usize) {
        if !self.repeats {
            self.used[self.cursor[pos]] = false;
        }
    }

    /// Fills positions `start..len` with the smallest free pool entries.
    fn fill_from(&mut self, start: usize) -> bool {
        for pos in start..self.len {
            match self.next_free(0) {
                Some(index) => self.take(pos, index),
                None => return false,
            }
        }
        true
    }

    /// Moves the cursor to the next sequence, backtracking from the last
    /// position.
    fn advance(&mut self) -> bool {
        let mut pos = self.len;
        while pos > 0 {
            pos -= 1;
            self.release(pos);
            if let Some(index) = self.next_free(self.cursor[pos] + 1) {
                self.take(pos, index);
                return self.fill_from(pos + 1);
            }
        }
        false
    }

    fn current(&self) -> Vec<T> {
        self.cursor.iter().map(|&i| self.pool[i].clone()).collect()
    }
}

impl<T: Clone> Iterator for Arrangements<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = match self.phase {
            Phase::Done => return None,
            Phase::Fresh => {
                self.phase = Phase::Running;
                (self.repeats || self.len <= self.pool.len()) && self.fill_from(0)
            }
            Phase::Running => self.advance(),
        };
        if found {
            Some(self.current())
        } else {
            self.phase = Phase::Done;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_repeats_is_lexicographic() {
        let all: Vec<Vec<u8>> = Arrangements::new(&[1, 2, 3], 2, false).collect();
        assert_eq!(
            all,
            vec![vec![1, 2], vec![1, 3], vec![2, 1], vec![2, 3], vec![3, 1], vec![3, 2]]
        );
    }

    #[test]
    fn with_repeats_is_cartesian_power() {
        let all: Vec<Vec<u8>> = Arrangements::new(&[1, 2], 2, true).collect();
        assert_eq!(all, vec![vec![1, 1], vec![1, 2], vec![2, 1], vec![2, 2]]);
        assert_eq!(Arrangements::new(&[1, 2, 3], 3, true).count(), 27);
    }

    #[test]
    fn counts_match_falling_factorial() {
        let pool: Vec<u8> = (1..=9).collect();
        assert_eq!(Arrangements::new(&pool, 2, false).count(), 72);
        assert_eq!(Arrangements::new(&pool, 4, false).count(), 3024);
        assert_eq!(Arrangements::new(&pool, 9, false).count(), 362_880);
    }

    #[test]
    fn too_long_without_repeats_is_empty() {
        let pool: Vec<u8> = (1..=9).collect();
        assert_eq!(Arrangements::new(&pool, 10, false).count(), 0);
    }

    #[test]
    fn duplicate_pool_values_are_distinct_positions() {
        let all: Vec<Vec<u8>> = Arrangements::new(&[2, 2, 5], 3, false).collect();
        assert_eq!(all.len(), 6);
        assert!(all.contains(&vec![5, 2, 2]));
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut it = Arrangements::new(&[7u8], 1, false);
        assert_eq!(it.next(), Some(vec![7]));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
