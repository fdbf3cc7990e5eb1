//! CLI library modules for the el-mention binary.
//!
//! This module provides reusable CLI functionality that can be tested
//! independently of the binary's `main`.

pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

/// Install the global logger.
///
/// `verbose` raises the level one step per occurrence from `warn`; `quiet`
/// drops it to `error`. `RUST_LOG`, when set, takes precedence.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = log_level(verbose, quiet);
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Level selected by the `-v`/`-q` flags.
#[must_use]
pub fn log_level(verbose: u8, quiet: bool) -> log::LevelFilter {
    if quiet {
        return log::LevelFilter::Error;
    }
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
