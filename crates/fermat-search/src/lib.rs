#![deny(missing_docs)]
#![doc = "Search for integer near-solutions of a^n + b^n = c^n, with exact Pythagorean views for n = 2."]

/// Approximate-triple finder and the ordered result set.
pub mod finder;
/// Threshold-based scan over bracketing roots.
pub mod near;
/// Supported ranges and enumeration options.
pub mod params;
/// Pythagorean views and Euclid's generator.
pub mod pythagorean;
pub mod residual;

pub use finder::{approximate_root, evaluate_pair, find_triples, find_triples_with, TripleSet};
pub use near::{near_solutions, DEFAULT_NEAR_THRESHOLD};
pub use params::{
    pair_count, SearchOptions, MAX_BOUND, MAX_EUCLID_LIMIT, MAX_EXPONENT, MAX_RESIDUAL_EXPONENT,
    MIN_EXPONENT,
};
pub use pythagorean::{euclid_triples, gcd, pythagorean_triples, EuclidTriple};
pub use residual::residual;
