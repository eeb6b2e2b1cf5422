use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use fermat_search::{near_solutions, DEFAULT_NEAR_THRESHOLD};

use super::{boxed, emit, render, OutputFormat};

#[derive(Args, Debug)]
pub struct NearArgs {
    #[arg(long, short = 'n')]
    pub exponent: u32,
    #[arg(long, short = 'b')]
    pub bound: u32,
    /// Largest accepted |a^n + b^n - c^n| / c^n.
    #[arg(long, default_value_t = DEFAULT_NEAR_THRESHOLD)]
    pub threshold: f64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &NearArgs) -> Result<(), Box<dyn Error>> {
    let hits = near_solutions(args.exponent, args.bound, args.threshold).map_err(boxed)?;
    log::info!("{} candidates within {}", hits.len(), args.threshold);
    let bytes = render(args.format, &hits, &hits)?;
    emit(args.out.as_deref(), &bytes)
}
