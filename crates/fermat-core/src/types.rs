use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Relative errors at or above this value map to zero precision.
pub const PRECISION_CUTOFF: f64 = 0.5;

/// Sign of `a^n + b^n - c^n` for a candidate triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Excess {
    /// The left hand side overshoots `c^n`.
    Over,
    /// The equation holds exactly.
    Exact,
    /// The left hand side falls short of `c^n`.
    Under,
}

impl Excess {
    /// Classifies the ordering of `a^n + b^n` relative to `c^n`.
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Excess::Over,
            Ordering::Equal => Excess::Exact,
            Ordering::Less => Excess::Under,
        }
    }
}

/// One evaluated candidate `(a, b)` for a fixed exponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triple {
    /// Smaller search variable.
    pub a: u32,
    /// Larger search variable.
    pub b: u32,
    /// Exponent of the run.
    pub n: u32,
    /// Real `c` satisfying `a^n + b^n = c^n`.
    pub c_exact: f64,
    /// Nearest integer to `c_exact`.
    pub c_rounded: u64,
    /// `|c_exact - c_rounded| / c_exact`.
    pub relative_error: f64,
    /// `|a^n + b^n - c_rounded^n|`, rounded once to `f64`.
    pub difference: f64,
    /// Sign of `a^n + b^n - c_rounded^n`.
    pub excess: Excess,
}

impl Triple {
    /// Returns true when `a^n + b^n = c_rounded^n` holds exactly.
    pub fn is_exact(&self) -> bool {
        self.excess == Excess::Exact
    }

    /// Plot scale in `[0, 1]`: one for exact triples, zero past the cutoff.
    pub fn precision(&self) -> f64 {
        1.0 - self.relative_error.min(PRECISION_CUTOFF) / PRECISION_CUTOFF
    }

    /// Ordering used for result sets: relative error, then `a`, then `b`.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.relative_error
            .total_cmp(&other.relative_error)
            .then(self.a.cmp(&other.a))
            .then(self.b.cmp(&other.b))
    }
}

/// Exact evaluation of an arbitrary candidate `(a, b, c)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Residual {
    /// First base.
    pub a: u64,
    /// Second base.
    pub b: u64,
    /// Candidate root.
    pub c: u64,
    /// Exponent.
    pub n: u32,
    /// `|a^n + b^n - c^n|`, rounded once to `f64`.
    pub difference: f64,
    /// `|a^n + b^n - c^n| / c^n`.
    pub relative_error: f64,
    /// Sign of `a^n + b^n - c^n`.
    pub excess: Excess,
}

impl Residual {
    /// Returns true when the candidate solves the equation.
    pub fn is_exact(&self) -> bool {
        self.excess == Excess::Exact
    }
}
