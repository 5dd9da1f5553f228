//! Input validation for allocation requests.
//!
//! Checks shape and range of every input before any computation starts.
//! Detects:
//! - Empty graphs and node counts above the configured maximum
//! - Edge probabilities outside `[0, 1]`
//! - Resource counts outside `[1, max_resources]`
//! - Task durations, deadlines and priorities outside their bounds
//! - Collections whose lengths disagree with the task count
//!
//! Every check collects all problems it finds instead of stopping at
//! the first one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ColorAssignment, DependencyGraph, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The graph has no tasks.
    EmptyGraph,
    /// A numeric parameter lies outside its recognized range.
    OutOfRange,
    /// Two collections that must be index-aligned have different lengths.
    LengthMismatch,
    /// An adjacency matrix row has the wrong length.
    NotSquare,
    /// `adj(i, j) != adj(j, i)`.
    Asymmetric,
    /// A task conflicts with itself.
    SelfLoop,
    /// An adjacency matrix entry other than 0 or 1.
    InvalidEntry,
    /// A task index does not exist in the graph.
    IndexOutOfRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Inclusive integer range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value.
    pub max: i64,
}

impl Bounds {
    /// Creates a new inclusive range.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Recognized input ranges.
///
/// The default reproduces the ranges the interactive front end offers:
/// up to 100 tasks, 1-20 resources, durations 1-10, deadlines 1-20 and
/// priorities 1-10. Missing fields in a configuration document fall back
/// to these defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of tasks (nodes).
    pub max_nodes: usize,
    /// Maximum number of display resources.
    pub max_resources: usize,
    /// Allowed task durations (time units). `min` is clamped up to 1.
    pub duration: Bounds,
    /// Allowed task deadlines (time units).
    pub deadline: Bounds,
    /// Allowed task priorities (lower = scheduled first).
    pub priority: Bounds,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_nodes: 100,
            max_resources: 20,
            duration: Bounds::new(1, 10),
            deadline: Bounds::new(1, 20),
            priority: Bounds::new(1, 10),
        }
    }
}

impl Limits {
    /// Limits that only enforce structural validity: positive durations,
    /// any deadline or priority, and no upper bound on counts.
    pub fn unbounded() -> Self {
        Self {
            max_nodes: usize::MAX,
            max_resources: usize::MAX,
            duration: Bounds::new(1, i64::MAX),
            deadline: Bounds::new(i64::MIN, i64::MAX),
            priority: Bounds::new(i64::MIN, i64::MAX),
        }
    }
}

fn fail(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that a graph has at least one task.
pub fn validate_non_empty(node_count: usize) -> ValidationResult {
    if node_count < 1 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyGraph,
            "Number of tasks must be at least 1",
        )]);
    }
    Ok(())
}

/// Checks that a node count lies within `[1, limits.max_nodes]`.
pub fn validate_node_count(node_count: usize, limits: &Limits) -> ValidationResult {
    validate_non_empty(node_count)?;
    if node_count > limits.max_nodes {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "Number of tasks {node_count} exceeds maximum {}",
                limits.max_nodes
            ),
        )]);
    }
    Ok(())
}

/// Checks that an edge probability lies within `[0, 1]`. NaN is rejected.
pub fn validate_probability(probability: f64) -> ValidationResult {
    if !(0.0..=1.0).contains(&probability) {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!("Graph density {probability} must be between 0 and 1"),
        )]);
    }
    Ok(())
}

/// Checks that a resource count lies within `[1, limits.max_resources]`.
pub fn validate_resource_count(resource_count: usize, limits: &Limits) -> ValidationResult {
    if resource_count < 1 || resource_count > limits.max_resources {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "Number of resources {resource_count} must be between 1 and {}",
                limits.max_resources
            ),
        )]);
    }
    Ok(())
}

/// Checks that two index-aligned collections have the same length.
pub fn validate_length(what: &str, expected: usize, actual: usize) -> ValidationResult {
    if expected != actual {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!("Expected {expected} {what}, got {actual}"),
        )]);
    }
    Ok(())
}

/// Checks per-task numeric fields against `limits`.
///
/// Durations must be positive regardless of `limits.duration.min`.
pub fn validate_tasks(tasks: &[Task], limits: &Limits) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, task) in tasks.iter().enumerate() {
        let label = index + 1;
        if task.duration < 1 || !limits.duration.contains(task.duration) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!(
                    "Task {label}: duration {} outside [{}, {}]",
                    task.duration,
                    limits.duration.min.max(1),
                    limits.duration.max
                ),
            ));
        }
        if !limits.deadline.contains(task.deadline) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!(
                    "Task {label}: deadline {} outside [{}, {}]",
                    task.deadline, limits.deadline.min, limits.deadline.max
                ),
            ));
        }
        if !limits.priority.contains(i64::from(task.priority)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!(
                    "Task {label}: priority {} outside [{}, {}]",
                    task.priority, limits.priority.min, limits.priority.max
                ),
            ));
        }
    }

    fail(errors)
}

/// Validates everything the scheduler consumes.
///
/// Checks:
/// 1. Node count within `[1, limits.max_nodes]`
/// 2. One `Task` per graph node
/// 3. One color per graph node
/// 4. Task fields within `limits`
pub fn validate_schedule_input(
    graph: &DependencyGraph,
    tasks: &[Task],
    colors: &ColorAssignment,
    limits: &Limits,
) -> ValidationResult {
    validate_node_count(graph.node_count(), limits)?;

    let mut errors = Vec::new();
    let n = graph.node_count();

    if let Err(e) = validate_length("tasks", n, tasks.len()) {
        errors.extend(e);
    }
    if let Err(e) = validate_length("colors", n, colors.len()) {
        errors.extend(e);
    }
    if let Err(e) = validate_tasks(tasks, limits) {
        errors.extend(e);
    }

    fail(errors)
}
