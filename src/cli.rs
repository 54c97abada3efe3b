// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `runlineage`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "runlineage",
    version,
    about = "Build a renderer-ready lineage model from task run snapshots.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the run snapshot file (JSON).
    ///
    /// One record per task, each carrying the output of the task's latest
    /// successful run (or null if it has none).
    #[arg(long, value_name = "PATH")]
    pub snapshot: String,

    /// Path to the layout options file (TOML).
    ///
    /// If omitted, `Runlineage.toml` is used when present in the current
    /// working directory; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Layout strategy, overriding the config file.
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub layout: Option<LayoutArg>,

    /// Restrict the build to these task ids (repeatable).
    ///
    /// Mirrors the dashboard task filter: the snapshot's task order is
    /// preserved, tasks not listed are ignored.
    #[arg(long = "task", value_name = "ID")]
    pub tasks: Vec<String>,

    /// Pretty-print the emitted model JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RUNLINEAGE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Layout strategy as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Single-parent spanning tree for hierarchical rendering.
    Tree,
    /// Column placement plus per-task bounding boxes.
    Boxes,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
