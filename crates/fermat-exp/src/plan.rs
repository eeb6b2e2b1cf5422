use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use fermat_core::{from_json_slice, from_yaml_slice, ErrorInfo, FermatError};
use fermat_search::params::{validate_bound, validate_exponent};
use serde::{Deserialize, Serialize};

/// Exponents and bound swept by one survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyPlan {
    /// Upper limit on `a` and `b` for every exponent.
    #[serde(default = "SurveyPlan::default_bound")]
    pub bound: u32,
    /// Exponents to search, in report order.
    #[serde(default = "SurveyPlan::default_exponents")]
    pub exponents: Vec<u32>,
    /// Number of best triples kept per exponent; `None` keeps all of them.
    #[serde(default = "SurveyPlan::default_top_k")]
    pub top_k: Option<usize>,
    /// Worker threads used by each search.
    #[serde(default = "SurveyPlan::default_parallelism")]
    pub parallelism: usize,
}

impl SurveyPlan {
    const fn default_bound() -> u32 {
        50
    }

    fn default_exponents() -> Vec<u32> {
        vec![2, 3, 4, 5]
    }

    const fn default_top_k() -> Option<usize> {
        Some(100)
    }

    const fn default_parallelism() -> usize {
        1
    }

    /// Rejects plans the finder would refuse, before any search starts.
    pub fn validate(&self) -> Result<(), FermatError> {
        validate_bound(self.bound)?;
        if self.exponents.is_empty() {
            return Err(FermatError::InvalidPlan(ErrorInfo::new(
                "no-exponents",
                "survey plan lists no exponents",
            )));
        }
        let mut seen = BTreeSet::new();
        for &n in &self.exponents {
            validate_exponent(n)?;
            if !seen.insert(n) {
                return Err(FermatError::InvalidPlan(
                    ErrorInfo::new("duplicate-exponent", "exponent listed more than once")
                        .with_context("n", n),
                ));
            }
        }
        Ok(())
    }
}

impl Default for SurveyPlan {
    fn default() -> Self {
        Self {
            bound: Self::default_bound(),
            exponents: Self::default_exponents(),
            top_k: Self::default_top_k(),
            parallelism: Self::default_parallelism(),
        }
    }
}

/// Loads a plan from YAML, or from JSON when the file extension is `.json`.
pub fn load_plan(path: &Path) -> Result<SurveyPlan, FermatError> {
    let bytes = fs::read(path).map_err(|err| {
        FermatError::Io(
            ErrorInfo::new("plan-read", "failed to read survey plan")
                .with_context("path", path.display())
                .with_hint(err.to_string()),
        )
    })?;
    let plan: SurveyPlan = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => from_json_slice(&bytes)?,
        _ => from_yaml_slice(&bytes)?,
    };
    plan.validate()?;
    Ok(plan)
}
