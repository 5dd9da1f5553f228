//! Schedule quality metrics (KPIs).
//!
//! Computes scheduling performance indicators from a completed
//! schedule and its input tasks.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest finish time |
//! | Total Tardiness | Sum of max(0, finish - deadline) |
//! | Maximum Tardiness | Largest single delay |
//! | On-Time Rate | Fraction meeting deadlines |
//! | Colors Used | Distinct resources in the timeline |
//! | Avg Flow Time | Mean finish time (all tasks released at 0) |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Schedule, Task};

/// Schedule performance indicators.
///
/// All time values are in the tasks' time units. Sums and differences
/// saturate at the `i64` range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Makespan: latest finish time.
    pub makespan: i64,
    /// Sum of tardiness across all tasks.
    pub total_tardiness: i64,
    /// Maximum tardiness of any single task.
    pub max_tardiness: i64,
    /// Fraction of tasks finishing by their deadline (0.0..1.0).
    pub on_time_rate: f64,
    /// Number of distinct colors appearing in the schedule.
    pub colors_used: usize,
    /// Total busy time per resource label.
    pub busy_time_by_resource: BTreeMap<String, i64>,
    /// Average flow time: mean finish time.
    pub avg_flow_time: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its input tasks.
    ///
    /// # Arguments
    /// * `schedule` - The completed schedule.
    /// * `tasks` - The input tasks, indexed like the schedule's `task` field.
    ///   Entries whose task index is outside `tasks` count toward makespan
    ///   and busy time but not tardiness.
    pub fn calculate(schedule: &Schedule, tasks: &[Task]) -> Self {
        let mut total_tardiness: i64 = 0;
        let mut max_tardiness: i64 = 0;
        let mut on_time_count: usize = 0;
        let mut counted_tasks: usize = 0;
        let mut total_flow_time: f64 = 0.0;
        let mut busy_time_by_resource: BTreeMap<String, i64> = BTreeMap::new();

        for entry in &schedule.entries {
            let busy = busy_time_by_resource
                .entry(entry.resource.clone())
                .or_insert(0);
            *busy = busy.saturating_add(entry.duration());

            let Some(task) = tasks.get(entry.task) else {
                continue;
            };
            counted_tasks += 1;
            total_flow_time += entry.finish as f64;

            if entry.finish > task.deadline {
                let tardiness = entry.finish.saturating_sub(task.deadline);
                total_tardiness = total_tardiness.saturating_add(tardiness);
                max_tardiness = max_tardiness.max(tardiness);
            } else {
                on_time_count += 1;
            }
        }

        let on_time_rate = if counted_tasks == 0 {
            1.0
        } else {
            on_time_count as f64 / counted_tasks as f64
        };

        let avg_flow_time = if counted_tasks == 0 {
            0.0
        } else {
            total_flow_time / counted_tasks as f64
        };

        Self {
            makespan: schedule.makespan(),
            total_tardiness,
            max_tardiness,
            on_time_rate,
            colors_used: busy_time_by_resource.len(),
            busy_time_by_resource,
            avg_flow_time,
        }
    }

    /// Whether no task is later than `max_tardiness`.
    pub fn meets_thresholds(&self, max_tardiness: i64) -> bool {
        self.max_tardiness <= max_tardiness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    fn make_schedule(entries: Vec<ScheduleEntry>) -> Schedule {
        Schedule {
            entries,
            overdue: Vec::new(),
        }
    }

    #[test]
    fn test_kpi_basic() {
        let tasks = vec![Task::new(1, 5, 1), Task::new(2, 5, 1)];
        let schedule = make_schedule(vec![
            ScheduleEntry::new(0, "A", 0, 1, 0),
            ScheduleEntry::new(1, "B", 1, 2, 1),
        ]);

        let kpi = ScheduleKpi::calculate(&schedule, &tasks);
        assert_eq!(kpi.makespan, 3);
        assert_eq!(kpi.total_tardiness, 0);
        assert_eq!(kpi.max_tardiness, 0);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_flow_time - 2.0).abs() < 1e-10); // (1+3)/2
        assert_eq!(kpi.colors_used, 2);
    }

    #[test]
    fn test_kpi_tardiness() {
        let tasks = vec![
            Task::new(4, 2, 1),  // Finishes at 4 → tardy 2
            Task::new(4, 10, 2), // Finishes at 8 → on time
        ];
        let schedule = make_schedule(vec![
            ScheduleEntry::new(0, "A", 0, 4, 0),
            ScheduleEntry::new(1, "B", 4, 4, 1),
        ]);

        let kpi = ScheduleKpi::calculate(&schedule, &tasks);
        assert_eq!(kpi.total_tardiness, 2);
        assert_eq!(kpi.max_tardiness, 2);
        assert!((kpi.on_time_rate - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_busy_time() {
        let tasks = vec![Task::new(2, 9, 1), Task::new(3, 9, 1), Task::new(1, 9, 1)];
        let schedule = make_schedule(vec![
            ScheduleEntry::new(0, "A", 0, 2, 0),
            ScheduleEntry::new(1, "B", 2, 3, 1),
            ScheduleEntry::new(2, "C", 0, 1, 0),
        ]);

        let kpi = ScheduleKpi::calculate(&schedule, &tasks);
        assert_eq!(kpi.busy_time_by_resource["Resource 1"], 3);
        assert_eq!(kpi.busy_time_by_resource["Resource 2"], 3);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &[]);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.total_tardiness, 0);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.colors_used, 0);
    }

    #[test]
    fn test_kpi_extreme_deadlines_saturate() {
        let tasks = vec![Task::new(5, i64::MIN, 1), Task::new(5, i64::MIN, 1)];
        let schedule = make_schedule(vec![
            ScheduleEntry::new(0, "A", 0, 5, 0),
            ScheduleEntry::new(1, "B", 0, 5, 1),
        ]);

        let kpi = ScheduleKpi::calculate(&schedule, &tasks);
        assert_eq!(kpi.max_tardiness, i64::MAX);
        assert_eq!(kpi.total_tardiness, i64::MAX);
        assert!((kpi.on_time_rate - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let tasks = vec![Task::new(5, 2, 1)]; // Tardy by 3
        let schedule = make_schedule(vec![ScheduleEntry::new(0, "A", 0, 5, 0)]);

        let kpi = ScheduleKpi::calculate(&schedule, &tasks);
        assert!(kpi.meets_thresholds(3));
        assert!(!kpi.meets_thresholds(2));
    }
}
