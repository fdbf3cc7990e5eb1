//! Evaluate command - score extracted mentions

use std::path::PathBuf;

use clap::Parser;

use super::super::output::accuracy_colored;
use super::super::utils::{dataset_id, load_dataset, save_dataset};
use crate::config::sibling_path;
use crate::eval::{evaluate_annotations, evaluate_dataset, AnnotationSet};

/// Score extracted mentions against labels or gold annotations
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Processed dataset JSON file
    #[arg(short, long, value_name = "PATH")]
    pub dataset: PathBuf,

    /// Gold annotation file to compare against (default: compare with the label)
    #[arg(short, long, value_name = "PATH")]
    pub annotations: Option<PathBuf>,

    /// Write the records that missed to a separate file
    #[arg(short, long)]
    pub keep: bool,

    /// Where to write kept misses (default: <dataset>_misses.json)
    #[arg(short, long, value_name = "PATH", requires = "keep")]
    pub output: Option<PathBuf>,
}

pub fn run(args: EvaluateArgs) -> Result<(), String> {
    let dataset = load_dataset(&args.dataset)?;

    let (accuracy, misses) = match &args.annotations {
        None => {
            let eval = evaluate_dataset(&dataset);
            (eval.accuracy, eval.misses)
        }
        Some(path) => {
            let annotations = AnnotationSet::load(path)
                .map_err(|e| format!("Failed to load annotations {}: {}", path.display(), e))?;
            let eval = evaluate_annotations(&dataset, &annotations).map_err(|e| e.to_string())?;
            let errors = serde_json::to_string(&eval.errors)
                .map_err(|e| format!("Failed to serialize error buckets: {}", e))?;
            println!("{}", errors);
            (eval.accuracy, eval.misses)
        }
    };

    println!(
        "{}",
        accuracy_colored(accuracy.ratio(), &accuracy.to_string())
    );

    if args.keep {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| sibling_path(&args.dataset, "_misses"));
        let kept = misses.len();
        let out = dataset.with_questions(misses, &dataset_id(&args.dataset));
        save_dataset(&out, &output)?;
        log::info!("kept {} misses in {}", kept, output.display());
    }

    Ok(())
}
