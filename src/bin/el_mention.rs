//! el-mention - entity-linking mention extraction benchmark
//!
//! # Usage
//!
//! ```bash
//! # Extract mentions with the trigram matcher
//! el-mention process -d lcquad.json
//!
//! # Same with the sliding-window baseline, on all cores
//! el-mention process -d lcquad.json --baseline --parallel -o baseline.json
//!
//! # Accuracy against the entity labels
//! el-mention evaluate -d lcquad_processed.json
//!
//! # Accuracy against gold annotations, keeping the misses
//! el-mention evaluate -d lcquad_processed.json -a annotations.json -k
//!
//! # Dataset summary
//! el-mention stats -d lcquad.json
//! ```

use std::process::ExitCode;

use clap::Parser;

use el_mention::cli::commands::{evaluate, process, stats};
use el_mention::cli::init_logging;
use el_mention::cli::output::color;
use el_mention::cli::parser::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result: Result<(), String> = match cli.command {
        Commands::Process(args) => process::run(args),
        Commands::Evaluate(args) => evaluate::run(args),
        Commands::Stats(args) => stats::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
