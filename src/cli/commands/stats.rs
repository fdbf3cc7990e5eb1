//! Stats command - dataset size summary

use std::path::PathBuf;

use clap::Parser;

use super::super::output::write_output;
use super::super::utils::load_dataset;
use crate::DatasetStats;

/// Count unique questions, entities and samples
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Dataset JSON file
    #[arg(short, long, value_name = "PATH")]
    pub dataset: PathBuf,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

pub fn run(args: StatsArgs) -> Result<(), String> {
    let dataset = load_dataset(&args.dataset)?;
    let stats = DatasetStats::compute(&dataset);
    let text = if args.json {
        serde_json::to_string_pretty(&stats)
            .map_err(|e| format!("Failed to serialize stats: {}", e))?
    } else {
        stats.to_string()
    };
    write_output(&text, args.output.as_deref())
}
