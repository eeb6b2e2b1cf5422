//! Survey orchestration and plot-ready exports for the Fermat search.

#![deny(missing_docs)]

mod export;
mod plan;
mod profile;
mod survey;

pub use export::{persist_survey, write_profile_csv, write_rows_csv, write_triples_csv};
pub use plan::{load_plan, SurveyPlan};
pub use profile::{error_profile, plot_points, PlotPoint, ProfilePoint};
pub use survey::{survey, ExponentSummary, SurveyOutcome, SurveyReport};
