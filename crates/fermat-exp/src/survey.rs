use fermat_core::{stable_hash_string, FermatError, RunProvenance, Triple};
use fermat_search::{find_triples_with, SearchOptions, TripleSet};
use serde::{Deserialize, Serialize};

use crate::plan::SurveyPlan;

/// Per-exponent summary inside a [`SurveyReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentSummary {
    /// Exponent searched.
    pub n: u32,
    /// Number of evaluated pairs.
    pub pairs: usize,
    /// Number of exact solutions (only non-zero for `n = 2`).
    pub exact: usize,
    /// Exact solutions with coprime bases.
    pub primitive_exact: usize,
    /// Minimum-error triple.
    pub best: Option<Triple>,
    /// Best triples, truncated to the plan's `top_k`.
    pub top: Vec<Triple>,
}

impl ExponentSummary {
    fn from_set(set: &TripleSet, top_k: Option<usize>) -> Self {
        let top = match top_k {
            Some(k) => set.top(k).to_vec(),
            None => set.as_slice().to_vec(),
        };
        Self {
            n: set.exponent(),
            pairs: set.len(),
            exact: set.exact().len(),
            primitive_exact: set.primitive_exact().len(),
            best: set.best().copied(),
            top,
        }
    }
}

/// Reproducible summary of a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    /// Schema and tool versions.
    pub provenance: RunProvenance,
    /// SHA-256 of the canonical JSON plan.
    pub plan_hash: String,
    /// Plan the survey ran.
    pub plan: SurveyPlan,
    /// One summary per exponent, in plan order.
    pub exponents: Vec<ExponentSummary>,
}

impl SurveyReport {
    /// Summary for exponent `n`, if it was part of the plan.
    pub fn exponent(&self, n: u32) -> Option<&ExponentSummary> {
        self.exponents.iter().find(|summary| summary.n == n)
    }
}

/// Report plus the full result sets it was built from.
#[derive(Debug, Clone)]
pub struct SurveyOutcome {
    /// Serialisable summary.
    pub report: SurveyReport,
    /// One set per exponent, in plan order.
    pub sets: Vec<TripleSet>,
}

/// Runs the finder for every exponent of the plan.
pub fn survey(plan: &SurveyPlan) -> Result<SurveyOutcome, FermatError> {
    plan.validate()?;
    let plan_hash = stable_hash_string(plan)?;
    let opts = SearchOptions::parallel(plan.parallelism);
    log::info!(
        "survey {} over exponents {:?} at bound {}",
        &plan_hash[..12],
        plan.exponents,
        plan.bound
    );

    let mut sets = Vec::with_capacity(plan.exponents.len());
    let mut summaries = Vec::with_capacity(plan.exponents.len());
    for &n in &plan.exponents {
        let set = find_triples_with(n, plan.bound, &opts)?;
        let summary = ExponentSummary::from_set(&set, plan.top_k);
        log::info!(
            "n={n}: {} exact solutions among {} pairs",
            summary.exact,
            summary.pairs
        );
        summaries.push(summary);
        sets.push(set);
    }

    let provenance = RunProvenance::new(plan_hash.clone())
        .with_tool(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    Ok(SurveyOutcome {
        report: SurveyReport {
            provenance,
            plan_hash,
            plan: plan.clone(),
            exponents: summaries,
        },
        sets,
    })
}
