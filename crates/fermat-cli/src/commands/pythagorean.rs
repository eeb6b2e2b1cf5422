use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use fermat_search::{gcd, pythagorean_triples};

use super::{boxed, emit, render, OutputFormat};

#[derive(Args, Debug)]
pub struct PythagoreanArgs {
    /// Upper limit on a and b.
    #[arg(long, short = 'b')]
    pub bound: u32,
    /// Only keep triples whose legs are coprime.
    #[arg(long)]
    pub primitive: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &PythagoreanArgs) -> Result<(), Box<dyn Error>> {
    let mut triples = pythagorean_triples(args.bound).map_err(boxed)?;
    if args.primitive {
        triples.retain(|t| gcd(u64::from(t.a), u64::from(t.b)) == 1);
    }
    log::info!("{} Pythagorean triples with legs up to {}", triples.len(), args.bound);
    let bytes = render(args.format, &triples, &triples)?;
    emit(args.out.as_deref(), &bytes)
}
