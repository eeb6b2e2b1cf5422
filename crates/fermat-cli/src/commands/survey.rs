use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use fermat_exp::{load_plan, persist_survey, survey, SurveyPlan};
use serde::Serialize;

use super::boxed;

#[derive(Args, Debug)]
pub struct SurveyArgs {
    /// YAML or JSON survey plan; defaults apply when omitted.
    #[arg(long)]
    pub plan: Option<PathBuf>,
    /// Overrides the plan bound.
    #[arg(long)]
    pub bound: Option<u32>,
    /// Overrides the plan exponents.
    #[arg(long, value_delimiter = ',')]
    pub exponents: Option<Vec<u32>>,
    #[arg(long)]
    pub threads: Option<usize>,
    /// Directory receiving the report and per-exponent tables.
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Debug, Serialize)]
struct SurveySummary {
    plan_hash: String,
    out: String,
    files: Vec<String>,
}

pub fn run(args: &SurveyArgs) -> Result<(), Box<dyn Error>> {
    let mut plan = match &args.plan {
        Some(path) => load_plan(path).map_err(boxed)?,
        None => SurveyPlan::default(),
    };
    if let Some(bound) = args.bound {
        plan.bound = bound;
    }
    if let Some(exponents) = &args.exponents {
        plan.exponents = exponents.clone();
    }
    if let Some(threads) = args.threads {
        plan.parallelism = threads;
    }

    let outcome = survey(&plan).map_err(boxed)?;
    let written = persist_survey(&args.out, &outcome).map_err(boxed)?;
    let summary = SurveySummary {
        plan_hash: outcome.report.plan_hash.clone(),
        out: args.out.display().to_string(),
        files: written
            .iter()
            .filter_map(|path| path.strip_prefix(&args.out).ok())
            .map(|path| path.display().to_string())
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
