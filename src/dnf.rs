//! Monotone DNFs over 0-indexed variables.
//!
//! A [`Dnf`] is an ordered sequence of clauses, each clause being a set of
//! variable indices interpreted as the conjunction of the positive literals.
//! The sequence itself is interpreted as a disjunction.
//!
//! Two special shapes denote the constant functions:
//! - no clauses at all is constant false,
//! - a single empty clause is constant true.
//!
//! Clauses keep the order in which they were produced and duplicates are not
//! removed. Use [`Dnf::to_set`] to obtain the canonical, order-independent form.

use std::collections::BTreeSet;
use std::fmt;

/// A conjunction of positive literals, given by variable indices.
pub type Clause = Vec<usize>;

/// Canonical form of a DNF: a set of clauses, each a set of variables.
pub type ClauseSet = BTreeSet<BTreeSet<usize>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dnf {
    clauses: Vec<Clause>,
}

impl Dnf {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    /// The constant true function: a single empty clause.
    pub fn tautology() -> Self {
        Self { clauses: vec![Vec::new()] }
    }

    /// The constant false function: no clauses.
    pub fn contradiction() -> Self {
        Self { clauses: Vec::new() }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub(crate) fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Returns `true` if the DNF has no clauses.
    pub fn is_false(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns `true` if the DNF consists of exactly one empty clause.
    pub fn is_true(&self) -> bool {
        self.clauses.len() == 1 && self.clauses[0].is_empty()
    }

    /// Returns `true` if the DNF syntactically denotes a constant function.
    pub fn is_constant(&self) -> bool {
        self.is_false() || self.is_true()
    }

    /// Number of variables needed to address every index, i.e. the maximal
    /// index plus one, or 0 if no clause mentions a variable.
    pub fn variable_count(&self) -> usize {
        self.clauses
            .iter()
            .flat_map(|c| c.iter())
            .max()
            .map_or(0, |&v| v + 1)
    }

    /// Converts the DNF into its canonical form.
    ///
    /// Clause order, literal order and duplicates are forgotten.
    pub fn to_set(&self) -> ClauseSet {
        self.clauses.iter().map(|c| c.iter().copied().collect()).collect()
    }

    /// Cofactor for `var = false`.
    ///
    /// Every clause containing `var` is falsified and dropped, all other
    /// clauses are kept unchanged.
    pub fn lower_cofactor(&self, var: usize) -> Dnf {
        let clauses = self.clauses.iter().filter(|c| !c.contains(&var)).cloned().collect();
        Dnf { clauses }
    }

    /// Cofactor for `var = true`.
    ///
    /// `var` is removed from every clause containing it. If some clause
    /// becomes empty the whole formula is satisfied and the result is
    /// [`Dnf::tautology`].
    pub fn upper_cofactor(&self, var: usize) -> Dnf {
        let mut clauses = Vec::with_capacity(self.clauses.len());
        for clause in &self.clauses {
            let reduced: Clause = clause.iter().copied().filter(|&x| x != var).collect();
            if reduced.is_empty() {
                return Dnf::tautology();
            }
            clauses.push(reduced);
        }
        Dnf { clauses }
    }

    /// Evaluates the DNF under the given assignment.
    ///
    /// # Panics
    ///
    /// Panics if some clause mentions a variable outside of `assignment`.
    pub fn eval(&self, assignment: &[bool]) -> bool {
        self.clauses.iter().any(|c| c.iter().all(|&v| assignment[v]))
    }
}

impl From<Vec<Clause>> for Dnf {
    fn from(clauses: Vec<Clause>) -> Self {
        Dnf::new(clauses)
    }
}

impl FromIterator<Clause> for Dnf {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Dnf::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dnf {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl fmt::Display for Dnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_false() {
            return write!(f, "F");
        }
        if self.is_true() {
            return write!(f, "T");
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            if clause.is_empty() {
                write!(f, "T")?;
            }
            for (j, v) in clause.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "x{}", v)?;
            }
        }
        Ok(())
    }
}
