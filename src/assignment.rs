//! Truth assignments and their enumeration.
//!
//! Rows are produced by a counter `c` running over `0..2^n`. Variable `k` takes the bit of `c`
//! at position `n - 1 - k`, so the last variable toggles fastest, and a `0` bit means `true`:
//!
//! ```text
//! c   p q
//! 0   T T
//! 1   T F
//! 2   F T
//! 3   F F
//! ```

use std::fmt::{Display, Formatter};
use std::iter::FusedIterator;
use std::ops::Index;

use crate::registry::MAX_VARIABLES;

/// One truth value per variable, indexed by registration order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Assignment(Vec<bool>);

impl Assignment {
    /// Build the assignment of row `counter` in a table over `n` variables.
    ///
    /// `n` must not exceed [`MAX_VARIABLES`].
    pub(crate) fn from_counter(counter: u64, n: usize) -> Self {
        assert!(n <= MAX_VARIABLES, "at most {} variables", MAX_VARIABLES);
        let values = (0..n).map(|k| (counter >> (n - 1 - k)) & 1 == 0).collect();
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).copied()
    }

    pub fn values(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for Assignment {
    fn from(values: Vec<bool>) -> Self {
        Self(values)
    }
}

impl Index<usize> for Assignment {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, &b) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", if b { 'T' } else { 'F' })?;
        }
        Ok(())
    }
}

/// All `2^n` assignments over `n` variables, in row order.
///
/// Returns `None` when `n` exceeds [`MAX_VARIABLES`].
pub fn enumerate(n: usize) -> Option<Assignments> {
    (n <= MAX_VARIABLES).then(|| Assignments::new(n))
}

/// Iterator over the rows of a truth table. See the [module docs][self] for the ordering.
#[derive(Debug, Clone)]
pub struct Assignments {
    n: usize,
    front: u64,
    back: u64,
}

impl Assignments {
    /// `n` must not exceed [`MAX_VARIABLES`]; a [`VariableRegistry`][crate::registry::VariableRegistry]
    /// never holds more.
    pub(crate) fn new(n: usize) -> Self {
        assert!(n <= MAX_VARIABLES, "at most {} variables", MAX_VARIABLES);
        Self {
            n,
            front: 0,
            back: 1 << n,
        }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let a = Assignment::from_counter(self.front, self.n);
        self.front += 1;
        Some(a)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        match usize::try_from(remaining) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for Assignments {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(Assignment::from_counter(self.back, self.n))
    }
}

impl ExactSizeIterator for Assignments {}

impl FusedIterator for Assignments {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    use test_log::test;

    fn bools(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == 'T').collect()
    }

    #[test]
    fn test_two_variables_order() {
        let rows: Vec<Assignment> = enumerate(2).unwrap().collect();
        assert_eq!(
            rows,
            vec![
                Assignment::from(bools("TT")),
                Assignment::from(bools("TF")),
                Assignment::from(bools("FT")),
                Assignment::from(bools("FF")),
            ]
        );
    }

    #[test]
    fn test_last_variable_toggles_fastest() {
        let rows: Vec<Assignment> = enumerate(3).unwrap().collect();
        for pair in rows.windows(2) {
            assert_ne!(pair[0][2], pair[1][2]);
        }
        assert_eq!(rows[3].values(), bools("TFF").as_slice());
        assert_eq!(rows[4].values(), bools("FTT").as_slice());
    }

    #[test]
    fn test_count_and_extremes() {
        for n in 1..=10 {
            let rows: Vec<Assignment> = enumerate(n).unwrap().collect();
            assert_eq!(rows.len(), 1 << n);
            assert!(rows[0].values().iter().all(|&b| b));
            assert!(rows[rows.len() - 1].values().iter().all(|&b| !b));
            let distinct: HashSet<_> = rows.iter().cloned().collect();
            assert_eq!(distinct.len(), rows.len());
        }
    }

    #[test]
    fn test_zero_variables() {
        let rows: Vec<Assignment> = enumerate(0).unwrap().collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_empty());
    }

    #[test]
    fn test_restartable_and_exact_size() {
        let rows = enumerate(4).unwrap();
        assert_eq!(rows.len(), 16);
        let first: Vec<_> = rows.clone().collect();
        let second: Vec<_> = rows.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reverse() {
        let forward: Vec<_> = enumerate(3).unwrap().collect();
        let mut backward: Vec<_> = enumerate(3).unwrap().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_too_many_variables() {
        assert!(enumerate(MAX_VARIABLES).is_some());
        assert!(enumerate(MAX_VARIABLES + 1).is_none());
    }

    #[test]
    fn test_get() {
        let a = Assignment::from(bools("TF"));
        assert_eq!(a.get(0), Some(true));
        assert_eq!(a.get(1), Some(false));
        assert_eq!(a.get(2), None);
    }

    #[test]
    fn test_wide_counter() {
        let a = Assignment::from_counter(u64::MAX >> 1, MAX_VARIABLES);
        assert_eq!(a.len(), MAX_VARIABLES);
        assert!(a.values().iter().all(|&b| !b));
    }

    #[test]
    fn test_display() {
        assert_eq!(Assignment::from(bools("TFT")).to_string(), "T F T");
    }
}
