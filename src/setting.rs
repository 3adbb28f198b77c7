//! Ranking of variables by their occurrence patterns.

use log::trace;

use crate::dnf::Dnf;
use crate::error::{LpbError, Result};
use crate::pattern::OccurrencePattern;

/// Occurrence patterns of all variables of a DNF, most important first.
///
/// `variable_pos[v]` is the rank of variable `v`, i.e. the index of its
/// pattern in `occurrences`. It is always a permutation of `0..len()`.
#[derive(Debug, Clone)]
pub struct VariableSetting {
    occurrences: Vec<OccurrencePattern>,
    variable_pos: Vec<usize>,
}

impl VariableSetting {
    /// Builds the setting with the number of variables inferred from the DNF.
    pub fn new(dnf: &Dnf) -> Self {
        Self::build(dnf, dnf.variable_count())
    }

    /// Builds the setting for variables `0..variables`.
    ///
    /// Fails if the DNF mentions a variable outside of that range.
    pub fn with_variables(dnf: &Dnf, variables: usize) -> Result<Self> {
        let needed = dnf.variable_count();
        if needed > variables {
            return Err(LpbError::PreconditionViolation(format!(
                "DNF mentions x{}, but only {} variables were given",
                needed - 1,
                variables
            )));
        }
        Ok(Self::build(dnf, variables))
    }

    fn build(dnf: &Dnf, variables: usize) -> Self {
        let occurrences = rank_patterns(dnf, 0..variables);
        let mut variable_pos = vec![0; variables];
        for (i, p) in occurrences.iter().enumerate() {
            variable_pos[p.variable()] = i;
        }
        Self {
            occurrences,
            variable_pos,
        }
    }

    /// Patterns ordered from most to least important.
    pub fn occurrences(&self) -> &[OccurrencePattern] {
        &self.occurrences
    }

    pub fn variable_pos(&self) -> &[usize] {
        &self.variable_pos
    }

    /// Rank of `var` in the importance order.
    ///
    /// # Panics
    ///
    /// Panics if `var >= self.len()`.
    pub fn position(&self, var: usize) -> usize {
        self.variable_pos[var]
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Variables in rank order.
    pub fn ranking(&self) -> impl Iterator<Item = usize> + '_ {
        self.occurrences.iter().map(|p| p.variable())
    }

    pub fn into_patterns(self) -> Vec<OccurrencePattern> {
        self.occurrences
    }
}

/// Builds the sorted occurrence patterns of `variables` in `dnf` and ranks
/// them from most to least important.
///
/// Occurrences of variables not listed are ignored. Patterns that compare
/// equal keep the order in which `variables` lists them.
pub fn rank_patterns<I>(dnf: &Dnf, variables: I) -> Vec<OccurrencePattern>
where
    I: IntoIterator<Item = usize>,
{
    let mut patterns: Vec<OccurrencePattern> = variables.into_iter().map(OccurrencePattern::new).collect();
    let mut slots: Vec<Option<usize>> = vec![None; dnf.variable_count()];
    for (i, p) in patterns.iter().enumerate() {
        if let Some(slot) = slots.get_mut(p.variable()) {
            *slot = Some(i);
        }
    }

    for clause in dnf {
        let size = clause.len();
        for &v in clause {
            if let Some(i) = slots[v] {
                patterns[i].push(size);
            }
        }
    }
    for p in patterns.iter_mut() {
        p.sort();
    }
    patterns.sort_by(|a, b| b.compare(a));

    trace!(
        "ranked variables: {:?}",
        patterns.iter().map(|p| p.variable()).collect::<Vec<_>>()
    );
    patterns
}
