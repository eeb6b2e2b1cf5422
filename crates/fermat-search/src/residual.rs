//! Exact evaluation of `a^n + b^n - c^n`.
//!
//! Powers are formed in `u128` when they fit and in arbitrary precision
//! otherwise, so exactness is always decided on integers. Only the final
//! magnitudes are rounded to `f64`.

use std::cmp::Ordering;

use fermat_core::{ErrorInfo, Excess, FermatError, Residual};
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::params::MAX_RESIDUAL_EXPONENT;

const F64_SAFE_BITS: u64 = 1000;

/// Signed comparison of `a^n + b^n` against `c^n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Balance {
    pub ordering: Ordering,
    /// `|a^n + b^n - c^n|`.
    pub difference: f64,
    /// `(a^n + b^n - c^n) / c^n`, always greater than -1.
    pub ratio: f64,
}

impl Balance {
    pub fn excess(&self) -> Excess {
        Excess::from_ordering(self.ordering)
    }
}

pub(crate) fn balance(a: u64, b: u64, c: u64, n: u32) -> Balance {
    balance_u128(a, b, c, n).unwrap_or_else(|| balance_big(a, b, c, n))
}

fn balance_u128(a: u64, b: u64, c: u64, n: u32) -> Option<Balance> {
    let lhs = u128::from(a)
        .checked_pow(n)?
        .checked_add(u128::from(b).checked_pow(n)?)?;
    let rhs = u128::from(c).checked_pow(n)?;
    let ordering = lhs.cmp(&rhs);
    let difference = lhs.abs_diff(rhs) as f64;
    Some(Balance {
        ordering,
        difference,
        ratio: signed(ordering, difference / rhs as f64),
    })
}

fn balance_big(a: u64, b: u64, c: u64, n: u32) -> Balance {
    let lhs = BigUint::from(a).pow(n) + BigUint::from(b).pow(n);
    let rhs = BigUint::from(c).pow(n);
    let ordering = lhs.cmp(&rhs);
    let diff = match ordering {
        Ordering::Less => &rhs - &lhs,
        _ => &lhs - &rhs,
    };
    let difference = diff.to_f64().unwrap_or(f64::INFINITY);
    // Drop low bits shared by both operands so the quotient stays finite past f64::MAX.
    let shift = rhs.bits().saturating_sub(F64_SAFE_BITS);
    let ratio = (&diff >> shift).to_f64().unwrap_or(f64::INFINITY)
        / (&rhs >> shift).to_f64().unwrap_or(f64::INFINITY);
    Balance {
        ordering,
        difference,
        ratio: signed(ordering, ratio),
    }
}

fn signed(ordering: Ordering, magnitude: f64) -> f64 {
    match ordering {
        Ordering::Less => -magnitude,
        Ordering::Equal => 0.0,
        Ordering::Greater => magnitude,
    }
}

/// Evaluates how far `(a, b, c)` is from solving `a^n + b^n = c^n`.
///
/// The relative error is `|a^n + b^n - c^n| / c^n`. All three bases must be
/// positive and `n` must lie in `1..=MAX_RESIDUAL_EXPONENT`.
pub fn residual(a: u64, b: u64, c: u64, n: u32) -> Result<Residual, FermatError> {
    if a == 0 || b == 0 || c == 0 {
        return Err(FermatError::InvalidTriple(
            ErrorInfo::new("non-positive-component", "a, b and c must all be positive")
                .with_context("a", a)
                .with_context("b", b)
                .with_context("c", c),
        ));
    }
    if n == 0 || n > MAX_RESIDUAL_EXPONENT {
        return Err(FermatError::InvalidExponent(
            ErrorInfo::new("exponent-out-of-range", "exponent must lie in 1..=1024")
                .with_context("n", n)
                .with_context("max", MAX_RESIDUAL_EXPONENT),
        ));
    }
    let balance = balance(a, b, c, n);
    Ok(Residual {
        a,
        b,
        c,
        n,
        difference: balance.difference,
        relative_error: balance.ratio.abs(),
        excess: balance.excess(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_powers_stay_in_u128() {
        let balance = balance_u128(3, 4, 5, 2).expect("fits");
        assert_eq!(balance.ordering, Ordering::Equal);
        assert_eq!(balance.ratio, 0.0);
    }

    #[test]
    fn big_path_agrees_with_u128_path() {
        let fast = balance_u128(9, 10, 12, 3).expect("fits");
        let slow = balance_big(9, 10, 12, 3);
        assert_eq!(fast, slow);
        assert_eq!(fast.difference, 1.0);
    }

    #[test]
    fn overflowing_powers_fall_back_to_big_integers() {
        assert!(balance_u128(4000, 4096, 4500, 12).is_none());
        let balance = balance(4000, 4096, 4500, 12);
        assert_ne!(balance.ordering, Ordering::Equal);
        assert!(balance.ratio.is_finite());
        assert!(balance.ratio > -1.0);
    }

    #[test]
    fn ratio_stays_finite_beyond_f64_range() {
        let balance = balance_big(3, 4, 5, 1000);
        assert_eq!(balance.ordering, Ordering::Less);
        assert!(balance.difference.is_infinite());
        assert!((balance.ratio + 1.0).abs() < 1e-12);
    }
}
