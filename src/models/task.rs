//! Task model.
//!
//! A task is a unit of work identified by its position in the task list.
//! Position `i` corresponds to node `i` of the conflict graph.

use serde::{Deserialize, Serialize};

/// A task to be allocated and scheduled.
///
/// # Time Representation
/// Durations and deadlines are integer time units relative to t=0.
/// The consumer defines what a unit is (hours, days, sprints).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Human-readable label. Passed through to the timeline untouched.
    #[serde(default)]
    pub description: String,
    /// Processing time (time units, positive).
    pub duration: i64,
    /// Latest acceptable finish time (time units).
    pub deadline: i64,
    /// Scheduling priority (lower = scheduled first).
    pub priority: i32,
}

impl Task {
    /// Default duration offered to new tasks.
    pub const DEFAULT_DURATION: i64 = 3;
    /// Default deadline offered to new tasks.
    pub const DEFAULT_DEADLINE: i64 = 10;
    /// Default priority offered to new tasks (highest).
    pub const DEFAULT_PRIORITY: i32 = 1;

    /// Creates a task with an empty description.
    pub fn new(duration: i64, deadline: i64, priority: i32) -> Self {
        Self {
            description: String::new(),
            duration,
            deadline,
            priority,
        }
    }

    /// Creates the default task for node `index`, labelled `Task {index+1}`.
    pub fn placeholder(index: usize) -> Self {
        Self::new(
            Self::DEFAULT_DURATION,
            Self::DEFAULT_DEADLINE,
            Self::DEFAULT_PRIORITY,
        )
        .with_description(Self::default_description(index))
    }

    /// The label used for node `index` when none is given.
    pub fn default_description(index: usize) -> String {
        format!("Task {}", index + 1)
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the duration.
    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Description, or `Task {index+1}` when empty.
    pub fn label(&self, index: usize) -> String {
        if self.description.is_empty() {
            Self::default_description(index)
        } else {
            self.description.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new(1, 1, 1)
            .with_description("Design review")
            .with_duration(4)
            .with_deadline(12)
            .with_priority(2);

        assert_eq!(task.description, "Design review");
        assert_eq!(task.duration, 4);
        assert_eq!(task.deadline, 12);
        assert_eq!(task.priority, 2);
    }

    #[test]
    fn test_placeholder() {
        let task = Task::placeholder(4);
        assert_eq!(task.description, "Task 5");
        assert_eq!(task.duration, 3);
        assert_eq!(task.deadline, 10);
        assert_eq!(task.priority, 1);
    }

    #[test]
    fn test_label_falls_back_to_index() {
        assert_eq!(Task::new(1, 1, 1).label(0), "Task 1");
        assert_eq!(Task::new(1, 1, 1).with_description("QA").label(0), "QA");
    }

    #[test]
    fn test_description_optional_in_documents() {
        let task: Task =
            serde_json::from_str(r#"{"duration": 2, "deadline": 5, "priority": 3}"#).unwrap();
        assert_eq!(task, Task::new(2, 5, 3));
    }
}
