use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    check::{self, CheckArgs},
    euclid::{self, EuclidArgs},
    near::{self, NearArgs},
    pythagorean::{self, PythagoreanArgs},
    search::{self, SearchArgs},
    survey::{self, SurveyArgs},
};
use log::LevelFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "fermat", version, about = "Integer near-solutions of a^n + b^n = c^n")]
struct Cli {
    /// Logging level (off, error, warn, info, debug, trace).
    #[arg(long = "log", global = true, default_value = "warn")]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank every pair a <= b <= bound by how close c is to an integer.
    Search(SearchArgs),
    /// List exact solutions of a^2 + b^2 = c^2.
    Pythagorean(PythagoreanArgs),
    /// Generate primitive Pythagorean triples with Euclid's formula.
    Euclid(EuclidArgs),
    /// Scan bracketing roots below a relative error threshold.
    Near(NearArgs),
    /// Evaluate a single candidate (a, b, c) for exponent n.
    Check(CheckArgs),
    /// Run the finder over several exponents and persist plot-ready artefacts.
    Survey(SurveyArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Search(args) => search::run(&args),
        Command::Pythagorean(args) => pythagorean::run(&args),
        Command::Euclid(args) => euclid::run(&args),
        Command::Near(args) => near::run(&args),
        Command::Check(args) => check::run(&args),
        Command::Survey(args) => survey::run(&args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
