//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mathgatectl",
    about = "Deterministic math-problem solving pipeline",
    version
)]
pub struct Cli {
    /// Emit machine-readable JSON instead of formatted output.
    #[arg(long, global = true)]
    pub json: bool,

    /// TOML file overriding the default numeric tolerances.
    #[arg(long, global = true, value_name = "PATH")]
    pub tolerances: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve one problem from text, a structured JSON record, or a file.
    Solve {
        /// Problem text.
        text: Option<String>,

        /// Structured JSON record, e.g. '{"category":"number_theory","n":360,"op":"divisor_sum"}'.
        #[arg(long, conflicts_with = "text")]
        structured: Option<String>,

        /// Read the problem (text or structured JSON) from a file.
        #[arg(long, conflicts_with_all = ["text", "structured"])]
        file: Option<PathBuf>,

        /// Also print the classifier's per-category scores.
        #[arg(long)]
        explain_routing: bool,
    },

    /// Run a JSON case file through the pipeline, reporting per-case
    /// latency and correctness.
    Bench {
        /// JSON array of cases: {id, problem|structured, expected?}.
        cases: PathBuf,

        /// Extraction cache capacity (entries).
        #[arg(long, default_value_t = 128)]
        cache_size: usize,

        /// Disable the extraction cache.
        #[arg(long)]
        no_cache: bool,
    },

    /// List the recognized categories and their keyword tables.
    Categories,
}
