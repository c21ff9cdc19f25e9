//! Pure classification of tasks against the calendar.
//!
//! Everything in this module is a deterministic function of a task snapshot
//! and an injected `today` date. No I/O, no mutation of the input: callers
//! load a snapshot from the store, pass `Local::now().date_naive()` as
//! `today`, and render whatever comes back. Tests inject fixed dates.

use chrono::{Duration, NaiveDate};

use crate::fields::{Filter, Priority};
use crate::task::Task;

/// Sort sentinel for tasks without a due date, so they land after every
/// dated task. Kept as a concrete far-future date rather than a None-last
/// comparator so ties against it behave like ordinary date ties.
fn far_future() -> NaiveDate {
    NaiveDate::from_ymd_opt(2999, 12, 31).unwrap()
}

/// True iff the due date is exactly today. No due date is never "today".
pub fn is_today(due: Option<NaiveDate>, today: NaiveDate) -> bool {
    due == Some(today)
}

/// True iff the due date is strictly before today.
pub fn is_overdue(due: Option<NaiveDate>, today: NaiveDate) -> bool {
    match due {
        Some(d) => d < today,
        None => false,
    }
}

/// True iff the due date falls within today..=today+7, inclusive both ends.
pub fn is_this_week(due: Option<NaiveDate>, today: NaiveDate) -> bool {
    match due {
        Some(d) => d >= today && d <= today + Duration::days(7),
        None => false,
    }
}

/// Rank used for priority tie-breaks: High before Med before Low.
pub fn priority_rank(p: Priority) -> u8 {
    match p {
        Priority::High => 0,
        Priority::Med => 1,
        Priority::Low => 2,
    }
}

/// Two-key sort order for task lists: due date (undated last), then priority.
/// Sole owner of the list ordering; every sorted view goes through here.
fn sort_in_place(tasks: &mut [&Task]) {
    tasks.sort_by_key(|t| (t.due.unwrap_or_else(far_future), priority_rank(t.priority)));
}

/// Sort tasks by due date ascending (undated last), then priority.
///
/// Returns a new vector of references; the input order is untouched and the
/// sort is stable, so equal-key tasks keep their snapshot order.
pub fn sort_tasks<'a>(tasks: &'a [Task]) -> Vec<&'a Task> {
    let mut out: Vec<&Task> = tasks.iter().collect();
    sort_in_place(&mut out);
    out
}

/// Apply a list filter, then sort the survivors.
pub fn filtered_tasks<'a>(tasks: &'a [Task], filter: Filter, today: NaiveDate) -> Vec<&'a Task> {
    let mut out: Vec<&Task> = tasks
        .iter()
        .filter(|t| match filter {
            Filter::Completed => t.completed,
            Filter::Overdue => !t.completed && is_overdue(t.due, today),
            Filter::Today => !t.completed && is_today(t.due, today),
            Filter::Week => !t.completed && is_this_week(t.due, today),
            Filter::Active => !t.completed,
        })
        .collect();
    sort_in_place(&mut out);
    out
}

/// Date-derived urgency for the today panel: overdue first, then due today,
/// then everything else. The stored priority field deliberately plays no
/// part here; only calendar pressure ranks the panel.
fn urgency_score(due: Option<NaiveDate>, today: NaiveDate) -> u8 {
    if is_overdue(due, today) {
        0
    } else if is_today(due, today) {
        1
    } else {
        2
    }
}

/// The five most calendar-urgent open tasks.
pub fn today_top_five<'a>(tasks: &'a [Task], today: NaiveDate) -> Vec<&'a Task> {
    let mut active: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
    active.sort_by_key(|t| (urgency_score(t.due, today), t.due.unwrap_or_else(far_future)));
    active.truncate(5);
    active
}

/// Effort estimate with the 30-minute default for absent or zero values.
pub fn estimate_minutes(task: &Task) -> u32 {
    match task.minutes {
        Some(m) if m > 0 => m,
        _ => 30,
    }
}

/// Total estimated minutes across a task sequence.
pub fn total_today_minutes(tasks: &[&Task]) -> u32 {
    tasks.iter().map(|t| estimate_minutes(t)).sum()
}

/// True iff any open task is overdue or due today. Drives the alert banner.
pub fn has_due_alert(tasks: &[Task], today: NaiveDate) -> bool {
    tasks
        .iter()
        .any(|t| !t.completed && (is_overdue(t.due, today) || is_today(t.due, today)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: u64, title: &str, due: Option<NaiveDate>, priority: Priority) -> Task {
        Task {
            id,
            title: title.to_string(),
            due,
            course: None,
            priority,
            minutes: None,
            completed: false,
            created_at_utc: 0,
            updated_at_utc: 0,
        }
    }

    #[test]
    fn test_date_predicates() {
        let today = day(2024, 6, 1);
        assert!(is_today(Some(day(2024, 6, 1)), today));
        assert!(!is_today(Some(day(2024, 5, 31)), today));
        assert!(!is_today(None, today));

        assert!(is_overdue(Some(day(2024, 5, 31)), today));
        assert!(!is_overdue(Some(day(2024, 6, 1)), today));
        assert!(!is_overdue(None, today));

        assert!(is_this_week(Some(day(2024, 6, 1)), today));
        assert!(is_this_week(Some(day(2024, 6, 8)), today));
        assert!(!is_this_week(Some(day(2024, 6, 9)), today));
        assert!(!is_this_week(Some(day(2024, 5, 31)), today));
        assert!(!is_this_week(None, today));
    }

    #[test]
    fn test_past_due_is_overdue_not_today() {
        let today = day(2024, 6, 1);
        let due = Some(day(2024, 1, 15));
        assert!(is_overdue(due, today));
        assert!(!is_today(due, today));
    }

    #[test]
    fn test_sort_priority_breaks_date_ties() {
        let tasks = vec![
            task(1, "A", Some(day(2024, 1, 1)), Priority::Med),
            task(2, "B", Some(day(2024, 1, 1)), Priority::High),
        ];
        let sorted = sort_tasks(&tasks);
        assert_eq!(sorted[0].title, "B");
        assert_eq!(sorted[1].title, "A");
        // Input untouched.
        assert_eq!(tasks[0].title, "A");
    }

    #[test]
    fn test_sort_undated_last() {
        let tasks = vec![
            task(1, "no date", None, Priority::High),
            task(2, "dated", Some(day(2030, 12, 31)), Priority::Low),
        ];
        let sorted = sort_tasks(&tasks);
        assert_eq!(sorted[0].title, "dated");
        assert_eq!(sorted[1].title, "no date");
    }

    #[test]
    fn test_filtered_order_matches_sort_tasks() {
        let today = day(2024, 6, 1);
        let tasks = vec![
            task(1, "undated", None, Priority::High),
            task(2, "late low", Some(day(2024, 5, 20)), Priority::Low),
            task(3, "late high", Some(day(2024, 5, 20)), Priority::High),
            task(4, "soon", Some(day(2024, 6, 3)), Priority::Med),
        ];
        let filtered: Vec<u64> = filtered_tasks(&tasks, Filter::Active, today)
            .iter()
            .map(|t| t.id)
            .collect();
        let sorted: Vec<u64> = sort_tasks(&tasks).iter().map(|t| t.id).collect();
        assert_eq!(filtered, sorted);
        assert_eq!(filtered, vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_filter_overdue_respects_completion() {
        let today = day(2024, 6, 1);
        let mut t = task(1, "late", Some(day(2024, 5, 1)), Priority::Med);
        let tasks = vec![t.clone()];
        assert_eq!(filtered_tasks(&tasks, Filter::Overdue, today).len(), 1);

        t.completed = true;
        let tasks = vec![t];
        assert!(filtered_tasks(&tasks, Filter::Overdue, today).is_empty());
    }

    #[test]
    fn test_filter_active_ignores_dates() {
        let today = day(2024, 6, 1);
        let tasks = vec![
            task(1, "undated", None, Priority::Low),
            task(2, "future", Some(day(2025, 1, 1)), Priority::Med),
        ];
        assert_eq!(filtered_tasks(&tasks, Filter::Active, today).len(), 2);
        assert!(filtered_tasks(&tasks, Filter::Today, today).is_empty());
    }

    #[test]
    fn test_filter_completed() {
        let today = day(2024, 6, 1);
        let mut done = task(1, "done", None, Priority::Med);
        done.completed = true;
        let tasks = vec![done, task(2, "open", None, Priority::Med)];
        let completed = filtered_tasks(&tasks, Filter::Completed, today);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].title, "done");
    }

    #[test]
    fn test_top_five_caps_at_five_and_skips_completed() {
        let today = day(2024, 6, 1);
        let mut tasks: Vec<Task> = (0..8)
            .map(|i| task(i, &format!("t{i}"), Some(day(2024, 5, 1)), Priority::Med))
            .collect();
        tasks[0].completed = true;
        let top = today_top_five(&tasks, today);
        assert_eq!(top.len(), 5);
        assert!(top.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_top_five_orders_by_urgency_not_priority() {
        let today = day(2024, 6, 1);
        let tasks = vec![
            task(1, "next week, high", Some(day(2024, 6, 5)), Priority::High),
            task(2, "today, low", Some(day(2024, 6, 1)), Priority::Low),
            task(3, "overdue, low", Some(day(2024, 5, 20)), Priority::Low),
        ];
        let top = today_top_five(&tasks, today);
        let titles: Vec<&str> = top.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["overdue, low", "today, low", "next week, high"]);
    }

    #[test]
    fn test_total_minutes_defaults() {
        assert_eq!(total_today_minutes(&[]), 0);
        let unset = task(1, "unset", None, Priority::Med);
        assert_eq!(total_today_minutes(&[&unset]), 30);
        let mut zero = task(2, "zero", None, Priority::Med);
        zero.minutes = Some(0);
        let mut set = task(3, "set", None, Priority::Med);
        set.minutes = Some(45);
        assert_eq!(total_today_minutes(&[&zero, &set]), 75);
    }

    #[test]
    fn test_due_alert() {
        let today = day(2024, 6, 1);
        assert!(!has_due_alert(&[], today));
        assert!(!has_due_alert(&[task(1, "later", Some(day(2024, 7, 1)), Priority::High)], today));
        assert!(has_due_alert(&[task(1, "now", Some(day(2024, 6, 1)), Priority::Low)], today));
        let mut done = task(1, "late but done", Some(day(2024, 5, 1)), Priority::High);
        done.completed = true;
        assert!(!has_due_alert(&[done], today));
    }
}
