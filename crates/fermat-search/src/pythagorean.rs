use fermat_core::{ErrorInfo, FermatError, Triple};
use serde::{Deserialize, Serialize};

use crate::finder::find_triples;
use crate::params::MAX_EUCLID_LIMIT;

/// Primitive Pythagorean triple produced by Euclid's formula from `(m, k)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EuclidTriple {
    /// Shorter leg.
    pub a: u64,
    /// Longer leg.
    pub b: u64,
    /// Hypotenuse.
    pub c: u64,
    /// Larger generator.
    pub m: u64,
    /// Smaller generator.
    pub k: u64,
}

/// Greatest common divisor; `gcd(0, x) = x`.
pub fn gcd(mut x: u64, mut y: u64) -> u64 {
    while y != 0 {
        let rem = x % y;
        x = y;
        y = rem;
    }
    x
}

/// Exact solutions of `a^2 + b^2 = c^2` with `a <= b <= bound`, ordered by `(a, b)`.
pub fn pythagorean_triples(bound: u32) -> Result<Vec<Triple>, FermatError> {
    let set = find_triples(2, bound)?;
    let mut exact = set.exact().to_vec();
    exact.sort_by(|lhs, rhs| lhs.a.cmp(&rhs.a).then(lhs.b.cmp(&rhs.b)));
    Ok(exact)
}

/// Every primitive triple with hypotenuse at most `limit`, ordered by `(c, a)`.
///
/// Uses `a = m^2 - k^2`, `b = 2mk`, `c = m^2 + k^2` over coprime `m > k >= 1`
/// of opposite parity; legs are swapped so that `a <= b`.
pub fn euclid_triples(limit: u64) -> Result<Vec<EuclidTriple>, FermatError> {
    if limit < 1 {
        return Err(FermatError::InvalidBound(
            ErrorInfo::new("limit-too-small", "hypotenuse limit must be at least 1")
                .with_context("limit", limit),
        ));
    }
    if limit > MAX_EUCLID_LIMIT {
        return Err(FermatError::InvalidBound(
            ErrorInfo::new("limit-too-large", "hypotenuse limit exceeds the supported range")
                .with_context("limit", limit)
                .with_context("max", MAX_EUCLID_LIMIT),
        ));
    }
    let mut triples = Vec::new();
    let mut m = 2u64;
    while m.saturating_mul(m).saturating_add(1) <= limit {
        for k in 1..m {
            if (m - k) % 2 == 0 || gcd(m, k) != 1 {
                continue;
            }
            let c = m * m + k * k;
            if c > limit {
                break;
            }
            let odd_leg = m * m - k * k;
            let even_leg = 2 * m * k;
            triples.push(EuclidTriple {
                a: odd_leg.min(even_leg),
                b: odd_leg.max(even_leg),
                c,
                m,
                k,
            });
        }
        m += 1;
    }
    triples.sort_by(|lhs, rhs| lhs.c.cmp(&rhs.c).then(lhs.a.cmp(&rhs.a)));
    Ok(triples)
}
