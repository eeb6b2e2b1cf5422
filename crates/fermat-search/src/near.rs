use fermat_core::{FermatError, Residual};

use crate::finder::approximate_root;
use crate::params::{validate_bound, validate_exponent, validate_threshold};
use crate::residual::residual;

/// Default relative error cutoff for [`near_solutions`].
pub const DEFAULT_NEAR_THRESHOLD: f64 = 0.1;

/// Candidates `(a, b, c)` with `c` bracketing the real root and every value at most `bound`.
///
/// For each pair `a <= b` both `floor(c_exact)` and `floor(c_exact) + 1` are
/// tried. A candidate is kept when `|a^n + b^n - c^n| / c^n <= threshold`.
/// Results are ordered by that error, then `a`, `b` and `c`.
pub fn near_solutions(n: u32, bound: u32, threshold: f64) -> Result<Vec<Residual>, FermatError> {
    validate_exponent(n)?;
    validate_bound(bound)?;
    validate_threshold(threshold)?;

    let mut found = Vec::new();
    for a in 1..=bound {
        for b in a..=bound {
            let floor = approximate_root(a, b, n).floor() as u64;
            for c in [floor, floor + 1] {
                if c == 0 || c > u64::from(bound) {
                    continue;
                }
                let candidate = residual(u64::from(a), u64::from(b), c, n)?;
                if candidate.relative_error <= threshold {
                    found.push(candidate);
                }
            }
        }
    }
    found.sort_by(|lhs, rhs| {
        lhs.relative_error
            .total_cmp(&rhs.relative_error)
            .then(lhs.a.cmp(&rhs.a))
            .then(lhs.b.cmp(&rhs.b))
            .then(lhs.c.cmp(&rhs.c))
    });
    log::debug!(
        "n={n} bound={bound} threshold={threshold}: {} near solutions",
        found.len()
    );
    Ok(found)
}
