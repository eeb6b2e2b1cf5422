use fermat_core::{ErrorInfo, FermatError};
use serde::{Deserialize, Serialize};

/// Smallest exponent accepted by the finder.
pub const MIN_EXPONENT: u32 = 2;
/// Largest exponent accepted by the finder.
pub const MAX_EXPONENT: u32 = 12;
/// Largest search bound accepted by the finder.
pub const MAX_BOUND: u32 = 4096;
/// Largest hypotenuse accepted by Euclid's generator, `MAX_BOUND^2`.
pub const MAX_EUCLID_LIMIT: u64 = (MAX_BOUND as u64) * (MAX_BOUND as u64);
/// Largest exponent accepted when evaluating an arbitrary candidate.
pub const MAX_RESIDUAL_EXPONENT: u32 = 1024;

/// Options controlling how the pair grid is enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Number of worker threads; one keeps the enumeration on the caller's thread.
    #[serde(default = "SearchOptions::default_parallelism")]
    pub parallelism: usize,
}

impl SearchOptions {
    const fn default_parallelism() -> usize {
        1
    }

    /// Returns options that enumerate rows on `threads` workers.
    pub fn parallel(threads: usize) -> Self {
        Self {
            parallelism: threads,
        }
    }

    /// Returns a sanitised copy with at least one worker.
    pub fn sanitised(&self) -> Self {
        Self {
            parallelism: self.parallelism.max(1),
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            parallelism: Self::default_parallelism(),
        }
    }
}

/// Checks that `n` lies in `MIN_EXPONENT..=MAX_EXPONENT`.
pub fn validate_exponent(n: u32) -> Result<(), FermatError> {
    if n < MIN_EXPONENT {
        return Err(FermatError::InvalidExponent(
            ErrorInfo::new("exponent-too-small", "exponent must be at least 2")
                .with_context("n", n)
                .with_context("min", MIN_EXPONENT),
        ));
    }
    if n > MAX_EXPONENT {
        return Err(FermatError::InvalidExponent(
            ErrorInfo::new("exponent-too-large", "exponent exceeds the supported range")
                .with_context("n", n)
                .with_context("max", MAX_EXPONENT),
        ));
    }
    Ok(())
}

/// Checks that `bound` lies in `1..=MAX_BOUND`.
pub fn validate_bound(bound: u32) -> Result<(), FermatError> {
    if bound < 1 {
        return Err(FermatError::InvalidBound(
            ErrorInfo::new("bound-too-small", "search bound must be at least 1")
                .with_context("bound", bound),
        ));
    }
    if bound > MAX_BOUND {
        return Err(FermatError::InvalidBound(
            ErrorInfo::new("bound-too-large", "search bound exceeds the supported range")
                .with_context("bound", bound)
                .with_context("max", MAX_BOUND)
                .with_hint("the result set holds bound * (bound + 1) / 2 triples"),
        ));
    }
    Ok(())
}

/// Checks that a relative error threshold is finite and non-negative.
pub fn validate_threshold(threshold: f64) -> Result<(), FermatError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(FermatError::InvalidThreshold(
            ErrorInfo::new("threshold-out-of-range", "threshold must be finite and non-negative")
                .with_context("threshold", threshold),
        ));
    }
    Ok(())
}

/// Number of pairs `1 <= a <= b <= bound`.
pub fn pair_count(bound: u32) -> usize {
    let bound = bound as usize;
    bound * (bound + 1) / 2
}
