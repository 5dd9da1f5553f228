//! Sequential greedy coloring.
//!
//! # Algorithm
//!
//! 1. Visit tasks in index order `0, 1, …, n-1`.
//! 2. Collect the colors of neighbors already visited.
//! 3. Assign the smallest non-negative color not in that set.
//!
//! # Complexity
//! O(n + m) set operations where m = number of edges.
//!
//! # Bound
//! A task with `d` colored neighbors receives a color `<= d`, so no color
//! exceeds `max_degree`.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{ColorAssignment, DependencyGraph};
use crate::validation::{self, Limits};
use crate::AllocationError;

/// Colors `graph` greedily in task-index order.
///
/// # Errors
/// `InvalidParameter` if the graph has no tasks.
pub fn greedy_coloring(graph: &DependencyGraph) -> Result<ColorAssignment, AllocationError> {
    validation::validate_non_empty(graph.node_count())?;

    let n = graph.node_count();
    let mut colors: Vec<Option<usize>> = vec![None; n];

    for node in 0..n {
        let neighbor_colors: HashSet<usize> = graph
            .neighbors(node)
            .iter()
            .filter_map(|&neighbor| colors[neighbor])
            .collect();

        let mut color = 0;
        while neighbor_colors.contains(&color) {
            color += 1;
        }
        colors[node] = Some(color);
    }

    let assignment = ColorAssignment::new(colors.into_iter().flatten().collect());
    debug!(
        tasks = n,
        edges = graph.edge_count(),
        colors_used = assignment.colors_used(),
        "greedy coloring complete"
    );
    Ok(assignment)
}

/// Colors `graph`, first checking an optional resource count.
///
/// The resource count only has to be within the default [`Limits`]; it
/// does not bound the coloring.
///
/// # Errors
/// `InvalidParameter` if the graph is empty or `resource_count` lies
/// outside `[1, max_resources]`. Both problems are reported together.
pub fn color(
    graph: &DependencyGraph,
    resource_count: Option<usize>,
) -> Result<ColorAssignment, AllocationError> {
    let mut errors = Vec::new();
    if let Err(e) = validation::validate_non_empty(graph.node_count()) {
        errors.extend(e);
    }
    if let Some(k) = resource_count {
        if let Err(e) = validation::validate_resource_count(k, &Limits::default()) {
            errors.extend(e);
        }
    }
    if !errors.is_empty() {
        return Err(AllocationError::InvalidParameter(errors));
    }

    greedy_coloring(graph)
}
