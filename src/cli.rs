// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dotprune`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dotprune",
    version,
    about = "Filter a DOT-style callgraph down to the ancestors/descendants of chosen nodes.",
    long_about = None
)]
pub struct CliArgs {
    /// Input graph file, or `-` to read from stdin.
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Keep everything the node with this label is reachable *from*.
    ///
    /// May be given multiple times; closures are merged.
    #[arg(long = "ancestors-of", value_name = "LABEL")]
    pub ancestors_of: Vec<String>,

    /// Keep everything reachable *from* the node with this label.
    ///
    /// May be given multiple times; closures are merged. (Spelling kept
    /// from the original tool.)
    #[arg(long = "descendents-of", value_name = "LABEL")]
    pub descendents_of: Vec<String>,

    /// Intersect the ancestor and descendant closures instead of
    /// taking their union.
    #[arg(long)]
    pub intersect: bool,

    /// Never traverse through the node with this label.
    ///
    /// May be given multiple times. Passing the flag replaces the
    /// default sentinel that some callgraph producers emit.
    #[arg(long = "ignore", value_name = "LABEL", default_value = "external node")]
    pub ignore: Vec<String>,

    /// Also keep (and color) callers of file-related syscalls.
    #[arg(long)]
    pub file: bool,

    /// Also keep (and color) callers of network-related syscalls.
    #[arg(long)]
    pub net: bool,

    /// Also keep (and color) callers of process-related syscalls.
    #[arg(long = "proc")]
    pub process: bool,

    /// Also keep (and color) callers of memory-related syscalls.
    #[arg(long)]
    pub mem: bool,

    /// Write the filtered graph here instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DOTPRUNE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
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
