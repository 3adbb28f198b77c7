//! Occurrence patterns of variables in a DNF.
//!
//! The occurrence pattern of a variable `x` in a DNF is the sorted multiset of
//! the sizes of all clauses containing `x`. Patterns are compared to rank
//! variables by "importance": a variable occurring in short clauses matters
//! more than one occurring only in long clauses, and among variables with the
//! same short clauses the one occurring more often matters more.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

/// The sorted clause sizes of one variable.
///
/// Equality and ordering only look at the occurrences, not at the variable.
#[derive(Debug, Clone)]
pub struct OccurrencePattern {
    variable: usize,
    occurrences: Vec<usize>,
}

impl OccurrencePattern {
    /// Creates an empty pattern for `variable`.
    pub fn new(variable: usize) -> Self {
        Self {
            variable,
            occurrences: Vec::new(),
        }
    }

    /// Creates a pattern with the given occurrences, which are sorted.
    pub fn with_occurrences(variable: usize, occurrences: Vec<usize>) -> Self {
        let mut pattern = Self { variable, occurrences };
        pattern.sort();
        pattern
    }

    pub fn variable(&self) -> usize {
        self.variable
    }

    pub fn occurrences(&self) -> &[usize] {
        &self.occurrences
    }

    /// Records an occurrence in a clause of the given size.
    ///
    /// The pattern is unsorted until [`sort`][Self::sort] is called.
    pub fn push(&mut self, clause_size: usize) {
        self.occurrences.push(clause_size);
    }

    pub fn sort(&mut self) {
        self.occurrences.sort_unstable();
    }

    /// Number of clauses containing the variable.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.occurrences.iter()
    }

    /// Compares two sorted patterns by importance.
    ///
    /// The sequences are walked position by position. At the first position
    /// where they differ, the pattern with the *smaller* clause size is the
    /// greater one. If one sequence is a proper prefix of the other, the longer
    /// one is greater. In particular an empty pattern is less than any
    /// non-empty one.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use lpb_rs::pattern::OccurrencePattern;
    ///
    /// let a = OccurrencePattern::with_occurrences(0, vec![2, 2, 2, 2]);
    /// let b = OccurrencePattern::with_occurrences(1, vec![2, 3, 3]);
    /// assert_eq!(a.compare(&b), Ordering::Greater);
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        for (a, b) in self.occurrences.iter().zip(&other.occurrences) {
            match a.cmp(b) {
                Ordering::Less => return Ordering::Greater,
                Ordering::Greater => return Ordering::Less,
                Ordering::Equal => {}
            }
        }
        self.len().cmp(&other.len())
    }
}

impl Index<usize> for OccurrencePattern {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.occurrences[index]
    }
}

impl<'a> IntoIterator for &'a OccurrencePattern {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.occurrences.iter()
    }
}

impl PartialEq for OccurrencePattern {
    fn eq(&self, other: &Self) -> bool {
        self.occurrences == other.occurrences
    }
}

impl Eq for OccurrencePattern {}

impl PartialOrd for OccurrencePattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OccurrencePattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for OccurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}: {:?}", self.variable, self.occurrences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(variable: usize, occurrences: &[usize]) -> OccurrencePattern {
        OccurrencePattern::with_occurrences(variable, occurrences.to_vec())
    }

    #[test]
    fn test_cmp_operators() {
        let o1 = op(0, &[2, 2, 2, 2]);
        let o2 = op(1, &[2, 2, 2]);
        let o3 = op(2, &[2, 3, 3]);
        let o4 = op(3, &[2, 3]);

        assert!(o1 > o2);
        assert!(o1 > o3);
        assert!(o1 > o4);

        assert!(o2 < o1);
        assert!(o3 < o1);

        assert!(o2 > o3);
        assert!(o2 > o4);

        assert!(o3 > o4);

        assert_ne!(o1, o2);
        assert_ne!(o2, o3);
        assert_ne!(o3, o4);

        assert_eq!(o1, o1);
        assert_eq!(o2, o2);
        assert_eq!(o3, o3);
        assert_eq!(o4, o4);
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let patterns = [
            op(0, &[1, 4, 6]),
            op(1, &[2, 3, 5]),
            op(2, &[1, 3, 7]),
            op(3, &[4, 5, 6]),
        ];
        for a in &patterns {
            for b in &patterns {
                assert_eq!(a.compare(b), b.compare(a).reverse(), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_equal_ignores_variable() {
        let a = op(0, &[3, 2, 2]);
        let b = op(5, &[2, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(a.compare(&b), Ordering::Equal);
        assert_eq!(a.variable(), 0);
        assert_eq!(b.variable(), 5);
    }

    #[test]
    fn test_empty_pattern() {
        let empty = OccurrencePattern::new(0);
        let other = OccurrencePattern::new(1);
        let single = op(2, &[9]);
        assert!(empty.is_empty());
        assert_eq!(empty.compare(&other), Ordering::Equal);
        assert_eq!(empty.compare(&single), Ordering::Less);
        assert_eq!(single.compare(&empty), Ordering::Greater);
    }

    #[test]
    fn test_push_and_sort() {
        let mut p = OccurrencePattern::new(4);
        p.push(3);
        p.push(1);
        p.push(2);
        assert_eq!(p.occurrences(), &[3, 1, 2]);
        p.sort();
        assert_eq!(p.occurrences(), &[1, 2, 3]);
        assert_eq!(p.len(), 3);
        assert_eq!(p[0], 1);
        assert_eq!(p.iter().sum::<usize>(), 6);
        assert_eq!((&p).into_iter().count(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(op(3, &[2, 1]).to_string(), "x3: [1, 2]");
    }
}
