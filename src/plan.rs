//! Focus-block planning.
//!
//! Greedy chunking of the today panel into fixed-size focus blocks: each
//! task's estimate is cut into 25-minute slices (last slice shorter), every
//! slice paired with a 5-minute break. The trailing break after the final
//! block is kept, matching how the blocks read back as a timed routine.

use crate::classify::estimate_minutes;
use crate::task::Task;

const FOCUS_MINUTES: u32 = 25;
const BREAK_MINUTES: u32 = 5;

/// One focus block in the plan: some minutes on a task, then a short break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanBlock {
    pub task: String,
    pub focus: u32,
    pub rest: u32,
}

/// Chunk tasks, in order, into focus blocks.
///
/// A task with no estimate (or a zero one) gets the 30-minute default, so
/// it still yields at least one block. An empty input yields an empty plan.
pub fn build_plan(tasks: &[&Task]) -> Vec<PlanBlock> {
    let mut blocks = Vec::new();
    for task in tasks {
        let mut remaining = estimate_minutes(task);
        while remaining > 0 {
            let chunk = remaining.min(FOCUS_MINUTES);
            blocks.push(PlanBlock {
                task: task.title.clone(),
                focus: chunk,
                rest: BREAK_MINUTES,
            });
            remaining -= chunk;
        }
    }
    blocks
}

/// Render a plan as numbered lines, one per block.
pub fn format_plan(blocks: &[PlanBlock]) -> String {
    if blocks.is_empty() {
        return "No tasks to plan yet.".to_string();
    }
    blocks
        .iter()
        .enumerate()
        .map(|(idx, b)| {
            format!(
                "Block {}: {} - {} min focus + {} min break",
                idx + 1,
                b.task,
                b.focus,
                b.rest
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;

    fn task_with_minutes(title: &str, minutes: Option<u32>) -> Task {
        Task {
            id: 1,
            title: title.to_string(),
            due: None,
            course: None,
            priority: Priority::Med,
            minutes,
            completed: false,
            created_at_utc: 0,
            updated_at_utc: 0,
        }
    }

    #[test]
    fn test_empty_plan_sentinel() {
        let blocks = build_plan(&[]);
        assert!(blocks.is_empty());
        assert_eq!(format_plan(&blocks), "No tasks to plan yet.");
    }

    #[test]
    fn test_hundred_minutes_splits_into_four_blocks() {
        let t = task_with_minutes("Essay", Some(100));
        let blocks = build_plan(&[&t]);
        assert_eq!(blocks.len(), 4);
        for b in &blocks {
            assert_eq!(b.task, "Essay");
            assert_eq!(b.focus, 25);
            assert_eq!(b.rest, 5);
        }
    }

    #[test]
    fn test_short_task_single_block() {
        let t = task_with_minutes("Flashcards", Some(10));
        let blocks = build_plan(&[&t]);
        assert_eq!(blocks, vec![PlanBlock { task: "Flashcards".into(), focus: 10, rest: 5 }]);
    }

    #[test]
    fn test_missing_estimate_defaults_to_thirty() {
        let t = task_with_minutes("Reading", None);
        let blocks = build_plan(&[&t]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].focus, 25);
        assert_eq!(blocks[1].focus, 5);

        let z = task_with_minutes("Zero", Some(0));
        assert_eq!(build_plan(&[&z]).len(), 2);
    }

    #[test]
    fn test_blocks_follow_task_order() {
        let a = task_with_minutes("A", Some(30));
        let b = task_with_minutes("B", Some(20));
        let blocks = build_plan(&[&a, &b]);
        let owners: Vec<&str> = blocks.iter().map(|b| b.task.as_str()).collect();
        assert_eq!(owners, vec!["A", "A", "B"]);
    }

    #[test]
    fn test_format_numbers_from_one() {
        let t = task_with_minutes("Lab report", Some(40));
        let text = format_plan(&build_plan(&[&t]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Block 1: Lab report - 25 min focus + 5 min break");
        assert_eq!(lines[1], "Block 2: Lab report - 15 min focus + 5 min break");
    }
}
