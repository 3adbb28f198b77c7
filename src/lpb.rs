//! Linear pseudo-Boolean constraints.
//!
//! An LPB is a constraint `a0 * x0 + ... + a(n-1) * x(n-1) >= d` over Boolean
//! variables `x0..x(n-1)`. Variables are numbered from 0.
//!
//! # Textual format
//!
//! A single line of whitespace-separated numbers, the last of which is the
//! threshold. The LPB `3 * x0 + 2 * x1 >= 5` is written as
//!
//! ```text
//! 3 2 5
//! ```
//!
//! ```
//! use lpb_rs::lpb::{parse_lpb, Lpb};
//!
//! let lpb = parse_lpb("3 2 5").unwrap();
//! assert_eq!(lpb, Lpb::new(5, vec![3, 2]));
//! assert_eq!(lpb.to_string(), "3 * x0 + 2 * x1 >= 5");
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{LpbError, Result};
use crate::types::Coefficient;

/// A linear pseudo-Boolean constraint with weights of kind `T`.
///
/// All coefficients are expected to be non-negative. This is not checked on
/// construction, see [`Lpb::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lpb<T> {
    threshold: T,
    coefficients: Vec<T>,
}

impl<T> Lpb<T> {
    /// Creates the LPB `coefficients[0] * x0 + ... >= threshold`.
    pub fn new(threshold: T, coefficients: Vec<T>) -> Self {
        Self { threshold, coefficients }
    }

    pub fn threshold(&self) -> &T {
        &self.threshold
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Number of coefficients (and thus variables).
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

impl<T: Coefficient> Lpb<T> {
    /// Checks that every coefficient is non-negative and the threshold is
    /// comparable. `NaN` fails both checks.
    pub fn validate(&self) -> Result<()> {
        if let Some(i) = self.coefficients.iter().position(|a| !a.is_non_negative()) {
            return Err(LpbError::PreconditionViolation(format!(
                "coefficient of x{} must be non-negative, got {}",
                i, self.coefficients[i]
            )));
        }
        if !self.threshold.is_comparable() {
            return Err(LpbError::PreconditionViolation(format!(
                "threshold is not comparable: {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Evaluates the constraint under the given assignment.
    ///
    /// # Panics
    ///
    /// Panics if `assignment` is shorter than the number of coefficients.
    pub fn eval(&self, assignment: &[bool]) -> bool {
        assert!(
            assignment.len() >= self.len(),
            "Assignment has {} values, but LPB has {} variables",
            assignment.len(),
            self.len()
        );
        let sum = self
            .coefficients
            .iter()
            .zip(assignment)
            .filter(|(_, x)| **x)
            .fold(T::zero(), |acc, (a, _)| acc + a.clone());
        sum >= self.threshold
    }
}

impl<T: fmt::Display> fmt::Display for Lpb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, a) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{} * x{}", a, i)?;
        }
        write!(f, " >= {}", self.threshold)
    }
}

impl<T: FromStr> FromStr for Lpb<T> {
    type Err = LpbError;

    fn from_str(s: &str) -> Result<Self> {
        let mut numbers = Vec::new();
        for token in s.split_whitespace() {
            let value = token
                .parse::<T>()
                .map_err(|_| LpbError::InvalidInput(format!("Not a number: '{}'", token)))?;
            numbers.push(value);
        }
        let threshold = numbers
            .pop()
            .ok_or_else(|| LpbError::InvalidInput("Input for LPB is empty".into()))?;
        debug!("parsed LPB with {} coefficients", numbers.len());
        Ok(Lpb::new(threshold, numbers))
    }
}

/// Parses an LPB with integer weights.
pub fn parse_lpb(s: &str) -> Result<Lpb<i64>> {
    s.parse()
}

/// Parses an LPB with weights of a caller-selected numeric kind.
///
/// ```
/// use lpb_rs::lpb::parse_lpb_as;
///
/// let lpb = parse_lpb_as::<f64>("1.5 2.5 3").unwrap();
/// assert_eq!(lpb.coefficients(), &[1.5, 2.5]);
/// ```
pub fn parse_lpb_as<T: FromStr>(s: &str) -> Result<Lpb<T>> {
    s.parse()
}
