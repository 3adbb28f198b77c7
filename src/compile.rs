//! Compilation of an LPB into an equivalent monotone DNF.
//!
//! The DNF is computed by a dynamic program over partial weighted sums. For
//! every position `i` we keep a list of pending partial assignments `(S, sum)`:
//! a sequence `S` of already chosen variables together with the sum of their
//! coefficients. Every position is seeded with the empty assignment `([], 0)`.
//! Positions are processed in order, and each pending `(S, sum)` at position
//! `i` with weight `a` is either
//!
//! - *closed*, if `sum + a >= d`: the clause `S + [i]` is emitted, or
//! - *extended*, otherwise: `(S + [i], sum + a)` is registered at every later
//!   position.
//!
//! Positions are visited by non-increasing coefficient (ties in index order).
//! The variable added last therefore carries the smallest weight of its
//! clause, which makes every emitted clause a minimal true point of the
//! constraint. For coefficient vectors that are already sorted this is the
//! plain left-to-right order.
//!
//! The number of explored partial assignments is exponential in the worst
//! case. This is inherent to the problem.
//!
//! ```
//! use lpb_rs::lpb::Lpb;
//!
//! let lpb = Lpb::new(3, vec![3, 2, 1]);
//! let dnf = lpb.to_dnf();
//! assert_eq!(dnf.clauses(), &[vec![0], vec![1, 2]]);
//! ```

use std::cmp::Ordering;

use log::{debug, trace};

use crate::dnf::{Clause, Dnf};
use crate::error::Result;
use crate::lpb::Lpb;
use crate::types::Coefficient;

/// A partially built clause together with the weight collected so far.
struct Partial<T> {
    clause: Clause,
    sum: T,
}

impl<T: Coefficient> Lpb<T> {
    /// Returns the DNF of all minimal sets of variables satisfying the LPB.
    ///
    /// - If there are no coefficients and the threshold is positive, the
    ///   result is the constant false DNF (no clauses).
    /// - If the threshold is not positive, the result is the constant true DNF
    ///   (a single empty clause).
    ///
    /// The same clause is never emitted twice for a fixed processing order, but
    /// no deduplication is attempted either. Compare results with
    /// [`Dnf::to_set`].
    ///
    /// Negative coefficients are not checked here and produce a DNF that does
    /// not describe the constraint. Use [`Lpb::try_to_dnf`] to reject them.
    ///
    /// A weighted sum involving an incomparable value (`NaN`) never reaches
    /// the threshold, so such variables occur in no clause, and an
    /// incomparable threshold gives the constant false DNF.
    pub fn to_dnf(&self) -> Dnf {
        let zero = T::zero();
        let d = self.threshold();
        let n = self.len();

        if !d.is_comparable() {
            debug!("to_dnf: incomparable threshold {}, never true", d);
            return Dnf::contradiction();
        }
        if n == 0 && *d > zero {
            debug!("to_dnf: no coefficients and positive threshold, never true");
            return Dnf::contradiction();
        }
        if *d <= zero {
            debug!("to_dnf: non-positive threshold, always true");
            return Dnf::tautology();
        }

        let order = self.processing_order();
        let mut pending: Vec<Vec<Partial<T>>> = (0..order.len())
            .map(|_| {
                vec![Partial {
                    clause: Vec::new(),
                    sum: zero.clone(),
                }]
            })
            .collect();

        let mut dnf = Dnf::contradiction();
        for (pos, &var) in order.iter().enumerate() {
            let a = &self.coefficients()[var];
            let partials = std::mem::take(&mut pending[pos]);
            trace!("to_dnf: x{} (weight {}) has {} pending partials", var, a, partials.len());

            for Partial { mut clause, sum } in partials {
                let sum = sum + a.clone();
                clause.push(var);
                if sum >= *d {
                    dnf.push(clause);
                } else {
                    for later in pending.iter_mut().skip(pos + 1) {
                        later.push(Partial {
                            clause: clause.clone(),
                            sum: sum.clone(),
                        });
                    }
                }
            }
        }

        debug!("to_dnf: {} -> {} clauses", self, dnf.len());
        dnf
    }

    /// Same as [`Lpb::to_dnf`], but fails on negative coefficients.
    pub fn try_to_dnf(&self) -> Result<Dnf> {
        self.validate()?;
        Ok(self.to_dnf())
    }

    /// Indices of the comparable coefficients sorted by non-increasing value.
    ///
    /// The sort is stable, so for an already sorted LPB this is `0..n`.
    /// Incomparable coefficients are left out, the remaining values are
    /// totally ordered.
    fn processing_order(&self) -> Vec<usize> {
        let coefficients = self.coefficients();
        let mut order: Vec<usize> = (0..coefficients.len())
            .filter(|&i| coefficients[i].is_comparable())
            .collect();
        if order.len() < coefficients.len() {
            debug!("to_dnf: skipping {} incomparable coefficients", coefficients.len() - order.len());
        }
        order.sort_by(|&i, &j| {
            coefficients[j]
                .partial_cmp(&coefficients[i])
                .unwrap_or(Ordering::Equal)
        });
        order
    }
}
