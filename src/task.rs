//! Task data structure.
//!
//! This module defines the core `Task` struct that represents a single piece
//! of coursework with its due date, priority, and estimated effort.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::Priority;

/// A single piece of coursework to track.
///
/// The due date is date-only (no time component); a missing due date means
/// "no deadline". `minutes` is the estimated effort; planning substitutes a
/// 30-minute default when it is absent or zero, but the stored value is
/// never coerced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default, alias = "dueDate")]
    pub due: Option<NaiveDate>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub minutes: Option<u32>,
    #[serde(default)]
    pub completed: bool,
    pub created_at_utc: i64,
    pub updated_at_utc: i64,
}
