//! Enumerations and field types for task management.
//!
//! This module defines the structured data types used to categorise tasks:
//! priority levels, list filters, and quick-add templates.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Priority classification for task importance. High is most urgent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    #[serde(alias = "High")]
    High,
    #[serde(alias = "Med", alias = "Medium", alias = "medium")]
    Med,
    #[serde(alias = "Low")]
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Med
    }
}

/// Filtering options for task lists based on completion and due dates.
///
/// `Active` is the default: every non-completed task regardless of due date.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Filter {
    Active,
    Today,
    Week,
    Overdue,
    Completed,
}

/// Quick-add templates that pre-fill common task shapes.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Template {
    /// "[Course] Assignment" stub.
    Assignment,
    /// One-hour study session, medium priority.
    Study,
    /// "[Course] Quiz/Exam" stub, high priority, due date required.
    Exam,
}
