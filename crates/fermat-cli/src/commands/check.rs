use std::error::Error;

use clap::Args;
use fermat_core::to_canonical_json_pretty;
use fermat_search::residual;

use super::boxed;

/// Evaluates `a^n + b^n - c^n` exactly.
#[derive(Args, Debug)]
pub struct CheckArgs {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub n: u32,
}

pub fn run(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let result = residual(args.a, args.b, args.c, args.n).map_err(boxed)?;
    println!("{}", to_canonical_json_pretty(&result).map_err(boxed)?);
    Ok(())
}
