//! Schedule (timeline) model.
//!
//! A schedule lists one entry per task in priority order, together with
//! the tasks that finish after their deadline.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

/// A complete timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// One entry per task, in priority order.
    pub entries: Vec<ScheduleEntry>,
    /// Indices of tasks with `finish > deadline`, in priority order.
    pub overdue: Vec<usize>,
}

/// Start, finish and resource of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Task index.
    pub task: usize,
    /// Task description (passed through).
    pub description: String,
    /// Start time.
    pub start: i64,
    /// Finish time (`start + duration`).
    pub finish: i64,
    /// Color id from the assignment.
    pub color: usize,
    /// Display label, `Resource {color+1}`.
    pub resource: String,
}

/// Timeline label for a color: `Resource {color+1}`.
///
/// Not folded by the resource count; see
/// [`ResourcePalette`](crate::coloring::ResourcePalette) for that.
pub fn resource_label(color: usize) -> String {
    format!("Resource {}", color + 1)
}

impl ScheduleEntry {
    /// Creates an entry, deriving `finish` and the resource label.
    ///
    /// `finish` saturates at `i64::MAX`; the scheduler rejects inputs
    /// whose finish would not fit before building entries.
    pub fn new(
        task: usize,
        description: impl Into<String>,
        start: i64,
        duration: i64,
        color: usize,
    ) -> Self {
        Self {
            task,
            description: description.into(),
            start,
            finish: start.saturating_add(duration),
            color,
            resource: resource_label(color),
        }
    }

    /// Duration (finish - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.finish.saturating_sub(self.start)
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no task is overdue.
    pub fn is_on_time(&self) -> bool {
        self.overdue.is_empty()
    }

    /// Latest finish time across all entries.
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.finish).max().unwrap_or(0)
    }

    /// Entry for a given task.
    pub fn entry_for_task(&self, task: usize) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.task == task)
    }

    /// Whether `task` is overdue.
    pub fn is_overdue(&self, task: usize) -> bool {
        self.overdue.contains(&task)
    }

    /// Entries of overdue tasks, in priority order.
    pub fn overdue_entries(&self) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| self.is_overdue(e.task))
            .collect()
    }

    /// Entries sharing a color.
    pub fn entries_for_color(&self, color: usize) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.color == color).collect()
    }

    /// Task indices in schedule order.
    pub fn task_order(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.task).collect()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        Schedule {
            entries: vec![
                ScheduleEntry::new(1, "Build", 0, 4, 0),
                ScheduleEntry::new(0, "Spec", 4, 2, 1),
                ScheduleEntry::new(2, "Ship", 0, 3, 0),
            ],
            overdue: vec![0],
        }
    }

    #[test]
    fn test_entry_derivation() {
        let e = ScheduleEntry::new(0, "Spec", 4, 2, 1);
        assert_eq!(e.finish, 6);
        assert_eq!(e.duration(), 2);
        assert_eq!(e.resource, "Resource 2");
    }

    #[test]
    fn test_entry_finish_saturates() {
        let e = ScheduleEntry::new(0, "Long", i64::MAX - 1, 5, 0);
        assert_eq!(e.finish, i64::MAX);
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample_schedule().makespan(), 6);
        assert_eq!(Schedule::new().makespan(), 0);
    }

    #[test]
    fn test_lookup() {
        let s = sample_schedule();
        assert_eq!(s.entry_for_task(0).unwrap().start, 4);
        assert!(s.entry_for_task(9).is_none());
        assert_eq!(s.task_order(), vec![1, 0, 2]);
        assert_eq!(s.entries_for_color(0).len(), 2);
        assert_eq!(s.entry_count(), 3);
    }

    #[test]
    fn test_overdue() {
        let s = sample_schedule();
        assert!(!s.is_on_time());
        assert!(s.is_overdue(0));
        assert!(!s.is_overdue(1));
        let late = s.overdue_entries();
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].description, "Spec");
        assert!(Schedule::new().is_on_time());
    }
}
