//! Command implementations for the el-mention CLI
//!
//! Each command has its own module/file.

pub mod evaluate;
pub mod process;
pub mod stats;

// Re-export argument types for parser
pub use evaluate::EvaluateArgs;
pub use process::ProcessArgs;
pub use stats::StatsArgs;
