//! Priority-pass timeline scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort task indices ascending by priority (ties keep index order).
//! 2. Set every start time to 0.
//! 3. In priority order, set `start(t) = max(start(d) + duration(d))` over the
//!    conflict neighbors `d` of `t`. Isolated tasks keep `start = 0`.
//! 4. `finish(t) = start(t) + duration(t)`; `t` is overdue if
//!    `finish(t) > deadline(t)`.
//!
//! Step 3 is a single pass, not a topological traversal. A neighbor that
//! comes later in priority order still has its initial start of 0, so it
//! contributes only its duration. Because conflict edges are symmetric,
//! two neighbors may each end up starting after the other's provisional
//! finish.
//!
//! # Complexity
//! O(n log n + m) where m = number of edges.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use tracing::debug;

use crate::models::{ColorAssignment, DependencyGraph, Schedule, ScheduleEntry, Task};
use crate::validation::{self, Limits, ValidationErrorKind};
use crate::AllocationError;

/// Priority-pass scheduler.
///
/// # Example
///
/// ```
/// use task_allot::scheduler::PriorityScheduler;
/// use task_allot::models::{ColorAssignment, DependencyGraph, Task};
///
/// let graph = DependencyGraph::from_edges(2, [(0, 1)]).unwrap();
/// let tasks = vec![Task::new(2, 10, 1), Task::new(2, 3, 2)];
/// let colors = ColorAssignment::new(vec![0, 1]);
///
/// let schedule = PriorityScheduler::new().schedule(&graph, &tasks, &colors).unwrap();
/// // Task 0 goes first and waits for task 1's provisional finish (0 + 2).
/// let first = schedule.entry_for_task(0).unwrap();
/// assert_eq!((first.start, first.finish), (2, 4));
/// let second = schedule.entry_for_task(1).unwrap();
/// assert_eq!((second.start, second.finish), (4, 6));
/// assert_eq!(schedule.overdue, vec![1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriorityScheduler {
    limits: Limits,
}

impl PriorityScheduler {
    /// Creates a scheduler enforcing the default [`Limits`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ranges task fields are checked against.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Computes start/finish times and overdue tasks.
    ///
    /// `tasks[i]` and `colors[i]` describe graph node `i`.
    ///
    /// # Errors
    /// `InvalidParameter` when the node count is outside `[1, max_nodes]`,
    /// `tasks` or `colors` disagree with the node count, a task field is
    /// out of range, or a start or finish time does not fit in `i64`.
    /// No schedule is returned in that case.
    pub fn schedule(
        &self,
        graph: &DependencyGraph,
        tasks: &[Task],
        colors: &ColorAssignment,
    ) -> Result<Schedule, AllocationError> {
        validation::validate_schedule_input(graph, tasks, colors, &self.limits)?;

        let order = priority_order(tasks);
        let mut start = vec![0i64; tasks.len()];

        for &task in &order {
            let mut latest: Option<i64> = None;
            for &dep in graph.neighbors(task) {
                let finish = start[dep]
                    .checked_add(tasks[dep].duration)
                    .ok_or_else(|| time_overflow(dep))?;
                latest = Some(latest.map_or(finish, |l| l.max(finish)));
            }
            if let Some(latest) = latest {
                start[task] = latest;
            }
        }

        let color_of = colors.as_slice();
        let mut schedule = Schedule::new();
        for &task in &order {
            if start[task].checked_add(tasks[task].duration).is_none() {
                return Err(time_overflow(task));
            }
            schedule.entries.push(ScheduleEntry::new(
                task,
                tasks[task].label(task),
                start[task],
                tasks[task].duration,
                color_of[task],
            ));
        }

        schedule.overdue = schedule
            .entries
            .iter()
            .filter(|e| e.finish > tasks[e.task].deadline)
            .map(|e| e.task)
            .collect();

        debug!(
            tasks = tasks.len(),
            makespan = schedule.makespan(),
            overdue = schedule.overdue.len(),
            "priority pass complete"
        );
        Ok(schedule)
    }
}

fn time_overflow(task: usize) -> AllocationError {
    AllocationError::invalid(
        ValidationErrorKind::OutOfRange,
        format!("Task {}: finish time exceeds the representable range", task + 1),
    )
}

/// Task indices sorted ascending by priority, ties in index order.
pub fn priority_order(tasks: &[Task]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..tasks.len()).collect();
    indices.sort_by_key(|&i| tasks[i].priority);
    indices
}

/// Schedules from parallel per-task slices.
///
/// Descriptions default to `Task {i+1}`. Fields are checked against the
/// default [`Limits`].
///
/// # Errors
/// `InvalidParameter` when any slice length differs from the node count,
/// plus every error [`PriorityScheduler::schedule`] reports.
pub fn schedule(
    graph: &DependencyGraph,
    durations: &[i64],
    deadlines: &[i64],
    priorities: &[i32],
    colors: &ColorAssignment,
) -> Result<Schedule, AllocationError> {
    validation::validate_non_empty(graph.node_count())?;

    let n = graph.node_count();
    let mut errors = Vec::new();
    for (what, len) in [
        ("durations", durations.len()),
        ("deadlines", deadlines.len()),
        ("priorities", priorities.len()),
    ] {
        if let Err(e) = validation::validate_length(what, n, len) {
            errors.extend(e);
        }
    }
    if !errors.is_empty() {
        return Err(AllocationError::InvalidParameter(errors));
    }

    let tasks: Vec<Task> = (0..n)
        .map(|i| {
            Task::new(durations[i], deadlines[i], priorities[i])
                .with_description(Task::default_description(i))
        })
        .collect();

    PriorityScheduler::new().schedule(graph, &tasks, colors)
}
