//! Process command - extract mentions for a whole dataset

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use super::super::output::color;
use super::super::parser::Method;
use super::super::utils::{dataset_id, load_dataset, save_dataset};
use crate::{process_records_with_progress, RunConfig};

/// Extract a mention for every record of a dataset
#[derive(Parser, Debug)]
pub struct ProcessArgs {
    /// Dataset JSON file
    #[arg(short, long, value_name = "PATH")]
    pub dataset: PathBuf,

    /// Output file (default: <dataset>_processed.json)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Use the sliding-window baseline (same as --method baseline)
    #[arg(short, long, conflicts_with = "method")]
    pub baseline: bool,

    /// Matcher to use (overrides the config file)
    #[arg(short, long)]
    pub method: Option<Method>,

    /// Process records on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Run configuration (TOML)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ProcessArgs {
    /// Config file settings with command-line flags applied on top.
    pub fn effective_config(&self) -> Result<RunConfig, String> {
        let mut config = RunConfig::resolve(self.config.as_deref())
            .map_err(|e| format!("Failed to load config: {}", e))?;
        if self.baseline {
            config.method = crate::MatcherKind::Baseline;
        }
        if let Some(method) = self.method {
            config.method = method.into();
        }
        config.parallel |= self.parallel;
        config.progress |= self.progress;
        Ok(config)
    }
}

pub fn run(args: ProcessArgs) -> Result<(), String> {
    let config = args.effective_config()?;
    let dataset = load_dataset(&args.dataset)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.output_path_for(&args.dataset));

    let pb = if config.progress {
        let pb = ProgressBar::new(dataset.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("Progress bar template should be valid");
        pb.set_style(style.progress_chars("#>-"));
        pb.set_message(config.method.to_string());
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let processed = process_records_with_progress(
        &dataset.questions,
        config.method,
        config.parallel,
        || pb.inc(1),
    );
    pb.finish_and_clear();

    let unmatched = processed.iter().filter(|r| r.mention_text().is_empty()).count();
    if unmatched > 0 {
        log::warn!("{} of {} records have no mention", unmatched, processed.len());
    }

    let total = processed.len();
    let out = dataset.with_questions(processed, &dataset_id(&args.dataset));
    save_dataset(&out, &output)?;

    eprintln!(
        "{} {} records with {} in {:.2?} -> {}",
        color("32", "✓"),
        total,
        config.method,
        start.elapsed(),
        output.display()
    );
    Ok(())
}
