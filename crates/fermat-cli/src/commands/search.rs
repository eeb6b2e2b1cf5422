use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use fermat_core::Triple;
use fermat_exp::PlotPoint;
use fermat_search::{find_triples_with, SearchOptions};
use serde::Serialize;

use super::{boxed, emit, render, OutputFormat};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Exponent n of a^n + b^n = c^n.
    #[arg(long, short = 'n')]
    pub exponent: u32,
    /// Upper limit on a and b.
    #[arg(long, short = 'b')]
    pub bound: u32,
    /// Keep only the K best triples.
    #[arg(long)]
    pub top: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Emit scatter points (a, b, c, precision) instead of full triples.
    #[arg(long)]
    pub plot: bool,
    /// Worker threads for the pair grid.
    #[arg(long, default_value_t = 1)]
    pub threads: usize,
}

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    n: u32,
    bound: u32,
    pairs: usize,
    exact: usize,
    triples: &'a [Triple],
}

pub fn run(args: &SearchArgs) -> Result<(), Box<dyn Error>> {
    let set = find_triples_with(
        args.exponent,
        args.bound,
        &SearchOptions::parallel(args.threads),
    )
    .map_err(boxed)?;
    let triples = match args.top {
        Some(k) => set.top(k),
        None => set.as_slice(),
    };
    let report = SearchReport {
        n: set.exponent(),
        bound: set.bound(),
        pairs: set.len(),
        exact: set.exact().len(),
        triples,
    };
    if args.plot {
        let points: Vec<PlotPoint> = triples.iter().map(PlotPoint::from).collect();
        let bytes = render(args.format, &points, &points)?;
        return emit(args.out.as_deref(), &bytes);
    }
    let bytes = render(args.format, &report, triples)?;
    emit(args.out.as_deref(), &bytes)
}
