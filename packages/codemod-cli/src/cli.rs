//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use object_shorthand::QuoteStyle;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "object-shorthand",
    version,
    about = "Rewrite object literal properties into shorthand properties and methods"
)]
pub struct Args {
    /// Files or directories to transform. `-` reads from stdin and writes to stdout.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Quote style for printed string literals: `single` or `double`.
    #[arg(long, value_name = "STYLE")]
    pub quote: Option<QuoteStyle>,

    /// JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not write changes back to disk.
    #[arg(short, long)]
    pub dry: bool,

    /// Print transformed sources to stdout.
    #[arg(short, long)]
    pub print: bool,

    /// Extensions picked up when walking directories (comma separated).
    #[arg(long, value_name = "EXT", value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Glob of paths to skip inside directories. Can be repeated.
    #[arg(long = "ignore-pattern", value_name = "GLOB")]
    pub ignore_pattern: Vec<String>,

    /// Name used to pick the dialect when reading stdin.
    #[arg(long, value_name = "NAME", default_value = "stdin.js")]
    pub stdin_filename: String,

    /// Number of worker threads.
    #[arg(long, value_name = "N")]
    pub cpus: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// True when the only path is `-`.
    pub fn reads_stdin(&self) -> bool {
        self.paths.len() == 1 && self.paths[0].as_os_str() == "-"
    }
}
