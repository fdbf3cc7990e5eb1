//! CLI argument parsing and structure definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::MatcherKind;

/// Entity-linking mention extraction benchmark
#[derive(Parser)]
#[command(name = "el-mention")]
#[command(
    author,
    version,
    about = "Entity-linking mention extraction benchmark",
    long_about = r#"
el-mention - find the span of a question that names a knowledge-base entity

DATASET FORMAT:
  { "dataset": {...}, "questions": [ { "id", "question_id", "question", "dbr" }, ... ] }

METHODS:
  • trigram   - greedy trigram-overlap spans, edge trimming, edit distance (default)
  • baseline  - every window as wide as the label, edit distance

EXAMPLES:
  el-mention process -d lcquad.json
  el-mention process -d lcquad.json --baseline -o lcquad_baseline.json
  el-mention evaluate -d lcquad_processed.json
  el-mention evaluate -d lcquad_processed.json -a annotations.json -k
  el-mention stats -d lcquad.json
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a mention for every record of a dataset
    #[command(visible_alias = "p")]
    Process(super::commands::ProcessArgs),

    /// Score extracted mentions against labels or gold annotations
    #[command(visible_alias = "e")]
    Evaluate(super::commands::EvaluateArgs),

    /// Count unique questions, entities and samples
    #[command(visible_alias = "s")]
    Stats(super::commands::StatsArgs),
}

/// Matcher selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Method {
    /// Trigram spans with trimming
    Trigram,
    /// Sliding window of label width
    Baseline,
}

impl From<Method> for MatcherKind {
    fn from(m: Method) -> Self {
        match m {
            Method::Trigram => MatcherKind::Trigram,
            Method::Baseline => MatcherKind::Baseline,
        }
    }
}
