//! Task storage and shared utility functions.
//!
//! This module provides the `Store` struct for persisting tasks as a JSON
//! file, along with due-date input parsing, relative date formatting, and
//! the table printer used by list-style commands.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::fields::Priority;
use crate::task::Task;

/// File-backed collection of tasks. Commands mutate this and save; the
/// classifier and planner only ever see `&[Task]` snapshots of it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Store {
    pub tasks: Vec<Task>,
}

impl Store {
    /// Load the store from a JSON file, starting empty if the file doesn't
    /// exist or can't be parsed.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Store::default();
        }
        let mut buf = String::new();
        match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Error parsing store, starting fresh: {e}");
                    Store::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading store, starting fresh: {e}");
                Store::default()
            }
        }
    }

    /// Save the store to a JSON file using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(self).expect("store serializes");
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// Generate the next available task ID.
    pub fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a task by ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Remove a task by ID. Returns true if something was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }
}

/// Normalise a title for storage: trimmed, and never empty.
/// Returns None for blank input so callers can reject it before persisting.
pub fn normalise_title(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Parse human-readable due date input.
///
/// Supports:
/// - "today", "tomorrow"
/// - "in 3d", "in 2w"
/// - "YYYY-MM-DD" format
pub fn parse_due_input(s: &str) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();
    let today = Local::now().date_naive();

    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(nd) = rest.strip_suffix('d') {
            if let Ok(days) = nd.trim().parse::<i64>() {
                return Some(today + Duration::days(days));
            }
        }
        if let Some(nw) = rest.strip_suffix('w') {
            if let Ok(weeks) = nw.trim().parse::<i64>() {
                return Some(today + Duration::weeks(weeks));
            }
        }
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()
}

/// Format a due date relative to today ("today", "tomorrow", "in 3d", "2d late").
pub fn format_due_relative(due: Option<NaiveDate>, today: NaiveDate) -> String {
    match due {
        None => "-".into(),
        Some(d) => {
            let delta = (d - today).num_days();
            if delta == 0 {
                "today".into()
            } else if delta == 1 {
                "tomorrow".into()
            } else if delta > 1 {
                format!("in {delta}d")
            } else {
                format!("{}d late", -delta)
            }
        }
    }
}

/// Format a priority level for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::High => "High",
        Priority::Med => "Med",
        Priority::Low => "Low",
    }
}

/// Print tasks in a formatted table.
pub fn print_table(tasks: &[&Task]) {
    println!(
        "{:<5} {:<5} {:<10} {:<6} {:<6} {:<14} {}",
        "ID", "Done", "Due", "Pri", "Est", "Course", "Title"
    );
    let today = Local::now().date_naive();
    for t in tasks {
        let done = if t.completed { "x" } else { "-" };
        let due = format_due_relative(t.due, today);
        let est = match t.minutes {
            Some(m) if m > 0 => format!("{m}m"),
            _ => "-".into(),
        };
        let course = t.course.clone().unwrap_or_else(|| "-".into());
        println!(
            "{:<5} {:<5} {:<10} {:<6} {:<6} {:<14} {}",
            t.id,
            done,
            due,
            format_priority(t.priority),
            est,
            truncate(&course, 14),
            t.title
        );
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}
