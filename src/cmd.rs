//! Command implementations for the CLI interface.
//!
//! This module contains all the command handlers that implement the various
//! subcommands, from task CRUD to the today panel and the focus-block plan.

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Local, Utc};

use crate::classify::{filtered_tasks, has_due_alert, today_top_five, total_today_minutes};
use crate::fields::{Filter, Priority, Template};
use crate::plan::{build_plan, format_plan};
use crate::store::*;
use crate::task::Task;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Short title for the task. Optional when a template supplies one.
        title: Option<String>,
        /// Use a template for default values: assignment | study | exam.
        #[arg(long, value_enum)]
        template: Option<Template>,
        /// Due date: YYYY-MM-DD, "today", "tomorrow", "in Nd", or "in Nw".
        #[arg(long)]
        due: Option<String>,
        /// Course label.
        #[arg(long)]
        course: Option<String>,
        /// Priority: high | med | low.
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Estimated minutes of work.
        #[arg(long)]
        minutes: Option<u32>,
    },

    /// List tasks with optional filters.
    List {
        /// Which tasks to show: active | today | week | overdue | completed.
        #[arg(long, value_enum, default_value_t = Filter::Active)]
        filter: Filter,
    },

    /// Show today's top priorities and their total estimated time.
    Today,

    /// Build a focus-block plan from today's top priorities.
    Plan,

    /// View a single task by ID.
    View {
        /// Task ID to view.
        id: u64,
    },

    /// Update fields on a task.
    Update {
        /// Task ID to update.
        id: u64,
        #[arg(long)]
        title: Option<String>,
        /// Due date: YYYY-MM-DD, "today", "tomorrow", "in Nd", or "in Nw".
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        #[arg(long)]
        minutes: Option<u32>,
        /// Clear due date.
        #[arg(long)]
        clear_due: bool,
        /// Clear course label.
        #[arg(long)]
        clear_course: bool,
        /// Clear minutes estimate.
        #[arg(long)]
        clear_minutes: bool,
    },

    /// Mark a task completed.
    Complete {
        /// Task ID to complete.
        id: u64,
    },

    /// Reopen a completed task.
    Reopen {
        /// Task ID to reopen.
        id: u64,
    },

    /// Delete a task by ID.
    Delete {
        /// Task ID to delete.
        id: u64,
    },

    /// List distinct courses and task counts.
    Courses,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Add a new task to the store.
pub fn cmd_add(
    store: &mut Store,
    db_path: &Path,
    title: Option<String>,
    template: Option<Template>,
    due: Option<String>,
    course: Option<String>,
    priority: Option<Priority>,
    minutes: Option<u32>,
) {
    // Apply template defaults; explicit flags win.
    let (title, priority, minutes, due_required) = match template {
        Some(Template::Assignment) => (
            title.unwrap_or_else(|| "[Course] Assignment".to_string()),
            priority,
            minutes,
            false,
        ),
        Some(Template::Study) => (
            title.unwrap_or_else(|| "Study session".to_string()),
            Some(priority.unwrap_or(Priority::Med)),
            Some(minutes.unwrap_or(60)),
            false,
        ),
        Some(Template::Exam) => (
            title.unwrap_or_else(|| "[Course] Quiz/Exam".to_string()),
            Some(priority.unwrap_or(Priority::High)),
            minutes,
            true,
        ),
        None => (title.unwrap_or_default(), priority, minutes, false),
    };

    let Some(title) = normalise_title(&title) else {
        eprintln!("Title cannot be empty.");
        std::process::exit(1);
    };

    let due = match due {
        Some(ref s) => {
            let parsed = parse_due_input(s);
            if parsed.is_none() {
                eprintln!("Unrecognised due date. Use YYYY-MM-DD, 'today', 'tomorrow', 'in Nd', or 'in Nw'.");
                std::process::exit(1);
            }
            parsed
        }
        None => None,
    };
    if due_required && due.is_none() {
        eprintln!("The exam template requires a due date (--due).");
        std::process::exit(1);
    }

    let now_utc = Utc::now().timestamp();
    let id = store.next_id();
    let task = Task {
        id,
        title,
        due,
        course: course.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()),
        priority: priority.unwrap_or_default(),
        minutes,
        completed: false,
        created_at_utc: now_utc,
        updated_at_utc: now_utc,
    };
    store.tasks.push(task);
    if let Err(e) = store.save(db_path) {
        eprintln!("Failed to save store: {e}");
        std::process::exit(1);
    }
    println!("Added task {}", id);
}

/// List tasks under the chosen filter, sorted by due date then priority.
pub fn cmd_list(store: &Store, filter: Filter) {
    let today = Local::now().date_naive();
    let filtered = filtered_tasks(&store.tasks, filter, today);
    if filtered.is_empty() {
        println!("No tasks here yet.");
        return;
    }
    print_table(&filtered);
}

/// Show the alert banner, today's top five tasks, and their total minutes.
pub fn cmd_today(store: &Store) {
    let today = Local::now().date_naive();
    if has_due_alert(&store.tasks, today) {
        println!("! You have tasks overdue or due today.");
        println!();
    }
    let top = today_top_five(&store.tasks, today);
    if top.is_empty() {
        println!("Nothing urgent today.");
        return;
    }
    print_table(&top);
    println!();
    println!("Planned minutes: {}", total_today_minutes(&top));
}

/// Print a focus-block plan built from today's top five tasks.
pub fn cmd_plan(store: &Store) {
    let today = Local::now().date_naive();
    let top = today_top_five(&store.tasks, today);
    let blocks = build_plan(&top);
    println!("{}", format_plan(&blocks));
}

/// View detailed information about a specific task.
pub fn cmd_view(store: &Store, id: u64) {
    let Some(task) = store.get(id) else {
        eprintln!("Task {} not found.", id);
        std::process::exit(1);
    };
    let today = Local::now().date_naive();
    println!("ID:         {}", task.id);
    println!("Title:      {}", task.title);
    println!("Completed:  {}", if task.completed { "yes" } else { "no" });
    println!("Priority:   {}", format_priority(task.priority));
    println!("Course:     {}", task.course.clone().unwrap_or_else(|| "-".into()));
    println!(
        "Due:        {}",
        match task.due {
            Some(d) => format!("{d} ({})", format_due_relative(Some(d), today)),
            None => "-".into(),
        }
    );
    println!(
        "Estimate:   {}",
        match task.minutes {
            Some(m) if m > 0 => format!("{m} min"),
            _ => "-".into(),
        }
    );
}

/// Update an existing task's fields. Completion state is untouched.
pub fn cmd_update(
    store: &mut Store,
    db_path: &Path,
    id: u64,
    title: Option<String>,
    due: Option<String>,
    course: Option<String>,
    priority: Option<Priority>,
    minutes: Option<u32>,
    clear_due: bool,
    clear_course: bool,
    clear_minutes: bool,
) {
    let Some(t) = store.get_mut(id) else {
        eprintln!("Task {} not found.", id);
        std::process::exit(1);
    };
    if let Some(s) = title {
        let Some(s) = normalise_title(&s) else {
            eprintln!("Title cannot be empty.");
            std::process::exit(1);
        };
        t.title = s;
    }
    if clear_due {
        t.due = None;
    }
    if let Some(ds) = due {
        t.due = parse_due_input(&ds);
        if t.due.is_none() {
            eprintln!("Unrecognised due date. Use YYYY-MM-DD, 'today', 'tomorrow', 'in Nd', or 'in Nw'.");
            std::process::exit(1);
        }
    }
    if clear_course {
        t.course = None;
    }
    if let Some(c) = course {
        t.course = if c.trim().is_empty() { None } else { Some(c.trim().to_string()) };
    }
    if let Some(p) = priority {
        t.priority = p;
    }
    if clear_minutes {
        t.minutes = None;
    }
    if let Some(m) = minutes {
        t.minutes = Some(m);
    }
    t.updated_at_utc = Utc::now().timestamp();
    if let Err(e) = store.save(db_path) {
        eprintln!("Failed to save store: {e}");
        std::process::exit(1);
    }
    println!("Updated task {}", id);
}

/// Mark a task as completed.
pub fn cmd_complete(store: &mut Store, db_path: &Path, id: u64) {
    let Some(t) = store.get_mut(id) else {
        eprintln!("Task {} not found.", id);
        std::process::exit(1);
    };
    t.completed = true;
    t.updated_at_utc = Utc::now().timestamp();
    if let Err(e) = store.save(db_path) {
        eprintln!("Failed to save store: {e}");
        std::process::exit(1);
    }
    println!("Marked done.");
}

/// Reopen a completed task.
pub fn cmd_reopen(store: &mut Store, db_path: &Path, id: u64) {
    let Some(t) = store.get_mut(id) else {
        eprintln!("Task {} not found.", id);
        std::process::exit(1);
    };
    t.completed = false;
    t.updated_at_utc = Utc::now().timestamp();
    if let Err(e) = store.save(db_path) {
        eprintln!("Failed to save store: {e}");
        std::process::exit(1);
    }
    println!("Reopened {}", id);
}

/// Delete a task by ID.
pub fn cmd_delete(store: &mut Store, db_path: &Path, id: u64) {
    if !store.remove(id) {
        eprintln!("Task {} not found.", id);
        std::process::exit(1);
    }
    if let Err(e) = store.save(db_path) {
        eprintln!("Failed to save store: {e}");
        std::process::exit(1);
    }
    println!("Deleted {}", id);
}

/// List distinct course labels with task counts.
pub fn cmd_courses(store: &Store) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for t in &store.tasks {
        if let Some(ref c) = t.course {
            *counts.entry(c.as_str()).or_default() += 1;
        }
    }
    if counts.is_empty() {
        println!("No courses yet.");
        return;
    }
    for (course, n) in counts {
        println!("{:<20} {}", course, n);
    }
}

/// Generate shell completion scripts to stdout.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
