use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed study planner CLI.
/// Storage defaults to ~/.studyplan/tasks.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "study", version, about = "Student task tracking and day planning CLI")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
