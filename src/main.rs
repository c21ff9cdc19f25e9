//! # studyplan - Student Task Tracking CLI
//!
//! A file-backed study planner for coursework: track tasks with due dates,
//! priorities, course labels and effort estimates; filter and sort them;
//! surface today's top priorities; and build a simple focus-block plan.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a task
//! study add "Finish calculus problem set" --due tomorrow --course "MATH 201" --minutes 90
//!
//! # Quick-add from a template
//! study add --template exam --course "CHEM 110" --due 2026-09-12
//!
//! # List open tasks (filters: active | today | week | overdue | completed)
//! study list --filter week
//!
//! # Today's top five priorities with total estimated minutes
//! study today
//!
//! # Turn them into 25-minute focus blocks
//! study plan
//! ```
//!
//! Data is stored locally as JSON in `~/.studyplan/tasks.json`; pass `--db`
//! to use a different file.

use std::path::PathBuf;

use clap::Parser;

pub mod classify;
pub mod cli;
pub mod cmd;
pub mod fields;
pub mod plan;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::*;
use store::Store;

fn main() {
    let cli = Cli::parse();

    let db_path = cli.db.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let data_dir = PathBuf::from(home).join(".studyplan");
        if let Err(e) = std::fs::create_dir_all(&data_dir) {
            eprintln!("Failed to create data directory {}: {}", data_dir.display(), e);
            std::process::exit(1);
        }
        data_dir.join("tasks.json")
    });

    let mut store = Store::load(&db_path);

    match cli.command {
        Commands::Add { title, template, due, course, priority, minutes } =>
            cmd_add(&mut store, &db_path, title, template, due, course, priority, minutes),

        Commands::List { filter } => cmd_list(&store, filter),

        Commands::Today => cmd_today(&store),

        Commands::Plan => cmd_plan(&store),

        Commands::View { id } => cmd_view(&store, id),

        Commands::Update { id, title, due, course, priority, minutes, clear_due, clear_course, clear_minutes } =>
            cmd_update(&mut store, &db_path, id, title, due, course, priority, minutes,
                      clear_due, clear_course, clear_minutes),

        Commands::Complete { id } => cmd_complete(&mut store, &db_path, id),

        Commands::Reopen { id } => cmd_reopen(&mut store, &db_path, id),

        Commands::Delete { id } => cmd_delete(&mut store, &db_path, id),

        Commands::Courses => cmd_courses(&store),

        Commands::Completions { shell } => cmd_completions(shell),
    }
}
