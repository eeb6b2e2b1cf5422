use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use fermat_search::euclid_triples;

use super::{boxed, emit, render, OutputFormat};

#[derive(Args, Debug)]
pub struct EuclidArgs {
    /// Largest hypotenuse to generate.
    #[arg(long, short = 'l')]
    pub limit: u64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &EuclidArgs) -> Result<(), Box<dyn Error>> {
    let triples = euclid_triples(args.limit).map_err(boxed)?;
    let bytes = render(args.format, &triples, &triples)?;
    emit(args.out.as_deref(), &bytes)
}
