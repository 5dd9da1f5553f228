//! One-shot allocation pipeline.
//!
//! An [`AllocationRequest`] gathers every parameter of a run into one
//! immutable value: the conflict graph, the per-task metadata, the number
//! of display resources and the accepted ranges. [`allocate`] validates
//! it, colors the graph and schedules the tasks.
//!
//! Requests are plain data; independent requests can run on separate
//! threads without coordination.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::coloring::{greedy_coloring, ResourcePalette};
use crate::export;
use crate::models::{ColorAssignment, DependencyGraph, Schedule, Task};
use crate::scheduler::{PriorityScheduler, ScheduleKpi};
use crate::validation::{self, Limits, ValidationResult};
use crate::AllocationError;

/// Input container for an allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Conflict graph between tasks.
    pub graph: DependencyGraph,
    /// One task per graph node.
    pub tasks: Vec<Task>,
    /// Number of display resources.
    #[serde(default = "default_resource_count")]
    pub resource_count: usize,
    /// Accepted input ranges.
    #[serde(default)]
    pub limits: Limits,
}

fn default_resource_count() -> usize {
    AllocationRequest::DEFAULT_RESOURCE_COUNT
}

impl AllocationRequest {
    /// Display resources offered when none are configured.
    pub const DEFAULT_RESOURCE_COUNT: usize = 10;

    /// Creates a request with the default resource count and limits.
    pub fn new(graph: DependencyGraph, tasks: Vec<Task>) -> Self {
        Self {
            graph,
            tasks,
            resource_count: Self::DEFAULT_RESOURCE_COUNT,
            limits: Limits::default(),
        }
    }

    /// Creates a request with [`Task::placeholder`] metadata for every node.
    pub fn with_default_tasks(graph: DependencyGraph) -> Self {
        let tasks = (0..graph.node_count()).map(Task::placeholder).collect();
        Self::new(graph, tasks)
    }

    /// Sets the number of display resources.
    pub fn with_resource_count(mut self, resource_count: usize) -> Self {
        self.resource_count = resource_count;
        self
    }

    /// Sets the accepted input ranges.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Checks the whole request against its limits.
    ///
    /// Checks:
    /// 1. Node count within `[1, max_nodes]`
    /// 2. Resource count within `[1, max_resources]`
    /// 3. One task per node
    /// 4. Task fields within range
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        let n = self.graph.node_count();

        if let Err(e) = validation::validate_node_count(n, &self.limits) {
            errors.extend(e);
        }
        if let Err(e) = validation::validate_resource_count(self.resource_count, &self.limits) {
            errors.extend(e);
        }
        if let Err(e) = validation::validate_length("tasks", n, self.tasks.len()) {
            errors.extend(e);
        }
        if let Err(e) = validation::validate_tasks(&self.tasks, &self.limits) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Result of an allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Color (resource) per task.
    pub colors: ColorAssignment,
    /// Timeline and overdue tasks.
    pub schedule: Schedule,
    /// Display palette for `resource_count` resources.
    pub palette: ResourcePalette,
}

impl Allocation {
    /// Display slot per task (`color % resource_count`).
    pub fn display_slots(&self) -> Vec<usize> {
        self.palette.fold(&self.colors)
    }

    /// Whether folding onto the display resources merges distinct colors.
    pub fn exceeds_resources(&self) -> bool {
        self.palette.is_lossy(&self.colors)
    }

    /// Timeline as CSV.
    pub fn to_csv(&self) -> String {
        export::timeline_csv(&self.schedule)
    }

    /// Performance indicators against the request's tasks.
    pub fn kpi(&self, request: &AllocationRequest) -> ScheduleKpi {
        ScheduleKpi::calculate(&self.schedule, &request.tasks)
    }
}

/// Validates `request`, colors its graph and schedules its tasks.
///
/// # Errors
/// `InvalidParameter` with every problem found by
/// [`AllocationRequest::validate`]. No coloring or scheduling happens
/// in that case.
pub fn allocate(request: &AllocationRequest) -> Result<Allocation, AllocationError> {
    request.validate()?;

    let palette = ResourcePalette::new(request.resource_count)?;
    let colors = greedy_coloring(&request.graph)?;
    let schedule = PriorityScheduler::new()
        .with_limits(request.limits.clone())
        .schedule(&request.graph, &request.tasks, &colors)?;

    info!(
        tasks = request.graph.node_count(),
        conflicts = request.graph.edge_count(),
        colors_used = colors.colors_used(),
        resources = request.resource_count,
        makespan = schedule.makespan(),
        overdue = schedule.overdue.len(),
        "allocation complete"
    );

    Ok(Allocation {
        colors,
        schedule,
        palette,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::seeded_gnp_graph;
    use crate::validation::ValidationErrorKind;

    fn path3_request() -> AllocationRequest {
        let graph = DependencyGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        AllocationRequest::new(
            graph,
            vec![
                Task::new(2, 10, 1).with_description("Spec"),
                Task::new(3, 4, 2).with_description("Build"),
                Task::new(1, 10, 3).with_description("Ship"),
            ],
        )
    }

    #[test]
    fn test_allocate_path() {
        let allocation = allocate(&path3_request()).unwrap();
        assert_eq!(allocation.colors.as_slice(), &[0, 1, 0]);

        // Order 0,1,2. Task 0: neighbor 1 unvisited → 0+3 = 3.
        // Task 1: max(3+2, 0+1) = 5. Task 2: 5+3 = 8.
        let s = &allocation.schedule;
        assert_eq!(s.entry_for_task(0).unwrap().start, 3);
        assert_eq!(s.entry_for_task(1).unwrap().start, 5);
        assert_eq!(s.entry_for_task(2).unwrap().start, 8);
        assert_eq!(s.overdue, vec![1]);
    }

    #[test]
    fn test_default_tasks() {
        let request = AllocationRequest::with_default_tasks(DependencyGraph::new(4));
        assert_eq!(request.tasks.len(), 4);
        assert_eq!(request.tasks[3].description, "Task 4");
        assert_eq!(request.resource_count, 10);

        let allocation = allocate(&request).unwrap();
        assert!(allocation.schedule.is_on_time());
        assert_eq!(allocation.schedule.makespan(), 3);
    }

    #[test]
    fn test_empty_graph_rejected() {
        let request = AllocationRequest::new(DependencyGraph::new(0), vec![]);
        let err = allocate(&request).unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::EmptyGraph));
    }

    #[test]
    fn test_all_problems_reported() {
        let request = AllocationRequest::new(DependencyGraph::new(2), vec![Task::new(0, 30, 1)])
            .with_resource_count(0);
        let err = allocate(&request).unwrap_err();
        // resource count, length, duration, deadline
        assert_eq!(err.errors().len(), 4);
        assert!(err.has_kind(ValidationErrorKind::LengthMismatch));
    }

    #[test]
    fn test_too_many_nodes() {
        let request = AllocationRequest::with_default_tasks(DependencyGraph::new(101));
        assert!(allocate(&request).is_err());

        let relaxed = AllocationRequest::with_default_tasks(DependencyGraph::new(101))
            .with_limits(Limits {
                max_nodes: 200,
                ..Limits::default()
            });
        assert!(allocate(&relaxed).is_ok());
    }

    #[test]
    fn test_display_fold() {
        let edges = (0..4).flat_map(|i| (i + 1..4).map(move |j| (i, j)));
        let graph = DependencyGraph::from_edges(4, edges).unwrap();
        let request = AllocationRequest::with_default_tasks(graph).with_resource_count(3);

        let allocation = allocate(&request).unwrap();
        assert_eq!(allocation.colors.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(allocation.display_slots(), vec![0, 1, 2, 0]);
        assert!(allocation.exceeds_resources());
        assert_eq!(
            allocation.schedule.entry_for_task(3).unwrap().resource,
            "Resource 4"
        );
    }

    #[test]
    fn test_csv_and_kpi() {
        let request = path3_request();
        let allocation = allocate(&request).unwrap();

        let csv = allocation.to_csv();
        assert!(csv.starts_with("Task,Start,Finish,Resource\n"));
        assert!(csv.contains("Build,5,8,Resource 2"));

        let kpi = allocation.kpi(&request);
        assert_eq!(kpi.makespan, 9);
        assert_eq!(kpi.max_tardiness, 4);
    }

    #[test]
    fn test_random_graph_end_to_end() {
        let graph = seeded_gnp_graph(60, 0.2, 11).unwrap();
        let request = AllocationRequest::with_default_tasks(graph);
        let allocation = allocate(&request).unwrap();

        assert!(allocation.colors.is_proper(&request.graph));
        assert_eq!(allocation.schedule.entry_count(), 60);
        for e in &allocation.schedule.entries {
            assert_eq!(
                allocation.schedule.is_overdue(e.task),
                e.finish > request.tasks[e.task].deadline
            );
        }
    }

    #[test]
    fn test_unbounded_limits_kpi() {
        let request =
            AllocationRequest::new(DependencyGraph::new(1), vec![Task::new(5, i64::MIN, 1)])
                .with_limits(Limits::unbounded());
        let allocation = allocate(&request).unwrap();
        assert_eq!(allocation.schedule.overdue, vec![0]);

        let kpi = allocation.kpi(&request);
        assert_eq!(kpi.max_tardiness, i64::MAX);
    }

    #[test]
    fn test_independent_requests_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AllocationRequest>();
        assert_send_sync::<Allocation>();
        assert_send_sync::<AllocationError>();

        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                std::thread::spawn(move || {
                    let graph = seeded_gnp_graph(30, 0.3, seed).unwrap();
                    let request = AllocationRequest::with_default_tasks(graph);
                    allocate(&request).map(|a| a.colors.is_proper(&request.graph))
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(true));
        }
    }

    #[test]
    fn test_request_document() {
        let json = r#"{
            "graph": {"node_count": 2, "edges": [[0, 1]]},
            "tasks": [
                {"description": "A", "duration": 2, "deadline": 5, "priority": 1},
                {"description": "B", "duration": 1, "deadline": 5, "priority": 1}
            ]
        }"#;
        let request: AllocationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.resource_count, 10);
        assert_eq!(request.limits, Limits::default());
        assert!(request.graph.has_edge(0, 1));

        let allocation = allocate(&request).unwrap();
        assert_eq!(allocation.colors.as_slice(), &[0, 1]);
    }
}
