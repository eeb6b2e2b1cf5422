use fermat_core::{ErrorInfo, FermatError, Triple};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::params::{pair_count, validate_bound, validate_exponent, SearchOptions};
use crate::pythagorean::gcd;
use crate::residual::balance;

/// Triples for one `(n, bound)` request, ordered by relative error, then `a`, then `b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripleSet {
    n: u32,
    bound: u32,
    triples: Vec<Triple>,
}

impl TripleSet {
    /// Exponent shared by every triple in the set.
    pub fn exponent(&self) -> u32 {
        self.n
    }

    /// Upper limit on `a` and `b`.
    pub fn bound(&self) -> u32 {
        self.bound
    }

    /// Number of evaluated pairs.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true when the set holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates the triples in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Borrows the ordered triples.
    pub fn as_slice(&self) -> &[Triple] {
        &self.triples
    }

    /// Consumes the set, returning the ordered triples.
    pub fn into_vec(self) -> Vec<Triple> {
        self.triples
    }

    /// Minimum-error triple.
    pub fn best(&self) -> Option<&Triple> {
        self.triples.first()
    }

    /// The `k` best approximations.
    pub fn top(&self, k: usize) -> &[Triple] {
        &self.triples[..k.min(self.triples.len())]
    }

    /// Exact solutions. Non-empty only for `n = 2`.
    pub fn exact(&self) -> &[Triple] {
        let end = self.triples.partition_point(Triple::is_exact);
        &self.triples[..end]
    }

    /// Exact solutions whose bases share no common factor.
    pub fn primitive_exact(&self) -> Vec<Triple> {
        self.exact()
            .iter()
            .filter(|triple| gcd(u64::from(triple.a), u64::from(triple.b)) == 1)
            .copied()
            .collect()
    }

    /// Triples with relative error no greater than `threshold`.
    pub fn within(&self, threshold: f64) -> &[Triple] {
        let end = self
            .triples
            .partition_point(|triple| triple.relative_error <= threshold);
        &self.triples[..end]
    }
}

impl<'a> IntoIterator for &'a TripleSet {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

/// Enumerates every pair `1 <= a <= b <= bound` for exponent `n` on the caller's thread.
///
/// Fails with `InvalidExponent` unless `2 <= n <= MAX_EXPONENT` and with
/// `InvalidBound` unless `1 <= bound <= MAX_BOUND`. Validation happens before
/// any pair is evaluated.
pub fn find_triples(n: u32, bound: u32) -> Result<TripleSet, FermatError> {
    find_triples_with(n, bound, &SearchOptions::default())
}

/// Same as [`find_triples`], optionally mapping grid rows on a rayon pool.
///
/// The pool only changes how pairs are evaluated; the merged result is sorted
/// afterwards so the output is identical to the sequential run.
pub fn find_triples_with(
    n: u32,
    bound: u32,
    opts: &SearchOptions,
) -> Result<TripleSet, FermatError> {
    validate_exponent(n)?;
    validate_bound(bound)?;
    let opts = opts.sanitised();
    log::debug!(
        "searching n={n} bound={bound} pairs={} threads={}",
        pair_count(bound),
        opts.parallelism
    );

    let mut triples: Vec<Triple> = if opts.parallelism == 1 {
        (1..=bound).flat_map(|a| row(a, bound, n)).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(opts.parallelism)
            .build()
            .map_err(|err| {
                FermatError::Io(
                    ErrorInfo::new("thread-pool", "failed to build search thread pool")
                        .with_context("threads", opts.parallelism)
                        .with_hint(err.to_string()),
                )
            })?;
        pool.install(|| {
            (1..=bound)
                .into_par_iter()
                .flat_map_iter(|a| row(a, bound, n))
                .collect()
        })
    };
    triples.sort_by(Triple::rank_cmp);

    if let Some(best) = triples.first() {
        log::info!(
            "n={n} bound={bound}: {} triples, best ({}, {}, {}) error {:e}",
            triples.len(),
            best.a,
            best.b,
            best.c_rounded,
            best.relative_error
        );
    }
    Ok(TripleSet { n, bound, triples })
}

fn row(a: u32, bound: u32, n: u32) -> impl Iterator<Item = Triple> {
    (a..=bound).map(move |b| triple_for(a, b, n))
}

/// Evaluates a single pair, ordering it so that `a <= b`.
pub fn evaluate_pair(a: u32, b: u32, n: u32) -> Result<Triple, FermatError> {
    validate_exponent(n)?;
    if a == 0 || b == 0 {
        return Err(FermatError::InvalidTriple(
            ErrorInfo::new("non-positive-component", "a and b must be positive")
                .with_context("a", a)
                .with_context("b", b),
        ));
    }
    Ok(triple_for(a.min(b), a.max(b), n))
}

/// `max(a, b) * (1 + (min / max)^n)^(1/n)`, which never forms `a^n` itself.
pub fn approximate_root(a: u32, b: u32, n: u32) -> f64 {
    let lo = f64::from(a.min(b));
    let hi = f64::from(a.max(b));
    hi * (1.0 + (lo / hi).powi(n as i32)).powf(1.0 / f64::from(n))
}

fn triple_for(a: u32, b: u32, n: u32) -> Triple {
    let estimate = approximate_root(a, b, n);
    let c_rounded = (estimate.round() as u64).max(1);
    let balance = balance(u64::from(a), u64::from(b), c_rounded, n);
    // c_exact / c_rounded = (1 + ratio)^(1/n); stays non-zero for any non-zero residual.
    let log_scale = balance.ratio.ln_1p() / f64::from(n);
    Triple {
        a,
        b,
        n,
        c_exact: c_rounded as f64 * log_scale.exp(),
        c_rounded,
        relative_error: (-log_scale).exp_m1().abs(),
        difference: balance.difference,
        excess: balance.excess(),
    }
}
