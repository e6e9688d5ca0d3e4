use clap::Parser;
use std::path::PathBuf;

use chmodr::Mode;

#[derive(Parser, Debug)]
#[command(name = "chmodr")]
#[command(
    about = "Recursively change permissions, keeping readable directories searchable",
    long_about = None
)]
pub struct Cli {
    /// Octal mode to apply, e.g. 644 or 0o640
    #[arg(value_parser = parse_mode)]
    pub mode: Mode,

    /// Files or directories to change
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Use the blocking traversal instead of the async one
    #[arg(long)]
    pub sync: bool,

    /// Visit the children of each directory one at a time
    #[arg(long, conflicts_with = "sync")]
    pub sequential: bool,

    /// Log every permission change
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_mode(input: &str) -> Result<Mode, String> {
    Mode::from_octal_str(input).map_err(|err| err.to_string())
}
