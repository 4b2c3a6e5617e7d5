use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphwash", about = "TriG graph-stream cleaner", version)]
pub struct Cli {
    /// Input file: a TriG-style named-graph export
    pub input: PathBuf,

    /// Output file for the cleaned records
    #[arg(short, long, default_value = "cleaned.trig")]
    pub output: PathBuf,

    /// Drop input lines containing this substring (repeatable)
    #[arg(long = "exclude", value_name = "SUBSTRING")]
    pub exclude: Vec<String>,

    /// File with one exclusion substring per line ('#' comments allowed)
    #[arg(long, value_name = "PATH")]
    pub exclude_file: Option<PathBuf>,

    /// Copy lines starting with this character to the output verbatim
    /// instead of parsing them (repeatable; default: '@' and '#')
    #[arg(long = "ignore-prefix", value_name = "CHAR")]
    pub ignore_prefix: Vec<char>,

    /// Report malformed graphs and continue instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,
}
