use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply pending deposits to a state snapshot
    #[command(name = "apply")]
    Apply(ApplyCommand),
}

#[derive(Debug, Parser)]
pub struct ApplyCommand {
    /// YAML beacon state to apply the deposits to
    #[arg(long, env = "REAM_DEPOSITS_STATE")]
    pub state: PathBuf,

    /// YAML list of pending deposits, applied in order
    #[arg(long)]
    pub deposits: PathBuf,

    /// Where to write the post-state; stdout if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
