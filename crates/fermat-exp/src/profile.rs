use fermat_core::Triple;
use fermat_search::TripleSet;
use serde::{Deserialize, Serialize};

/// One sample of the error-comparison curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Position of the triple among the plotted best approximations, on `[0, 1]`.
    pub index: f64,
    /// Relative error of the triple.
    pub relative_error: f64,
    /// Whether the triple solves the equation.
    pub exact: bool,
    /// Smaller base.
    pub a: u32,
    /// Larger base.
    pub b: u32,
    /// Rounded root.
    pub c: u64,
}

/// Coordinates and marker scale for a 3D scatter of `(a, b, c)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// Smaller base.
    pub a: u32,
    /// Larger base.
    pub b: u32,
    /// Rounded root.
    pub c: u64,
    /// Exponent.
    pub n: u32,
    /// Relative error of the rounded root.
    pub relative_error: f64,
    /// `1 - min(relative_error, 0.5) / 0.5`.
    pub precision: f64,
    /// Whether the triple solves the equation.
    pub exact: bool,
}

impl From<&Triple> for PlotPoint {
    fn from(triple: &Triple) -> Self {
        Self {
            a: triple.a,
            b: triple.b,
            c: triple.c_rounded,
            n: triple.n,
            relative_error: triple.relative_error,
            precision: triple.precision(),
            exact: triple.is_exact(),
        }
    }
}

/// Error curve over the best `limit` triples, indexed evenly on `[0, 1]`.
pub fn error_profile(set: &TripleSet, limit: usize) -> Vec<ProfilePoint> {
    let best = set.top(limit);
    let span = best.len().saturating_sub(1);
    best.iter()
        .enumerate()
        .map(|(idx, triple)| ProfilePoint {
            index: if span == 0 {
                0.0
            } else {
                idx as f64 / span as f64
            },
            relative_error: triple.relative_error,
            exact: triple.is_exact(),
            a: triple.a,
            b: triple.b,
            c: triple.c_rounded,
        })
        .collect()
}

/// Scatter points for every triple in rank order.
pub fn plot_points(set: &TripleSet) -> Vec<PlotPoint> {
    set.iter().map(PlotPoint::from).collect()
}
