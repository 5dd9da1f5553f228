//! Color (resource) assignment model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::DependencyGraph;

/// Color id per task, indexed by task position.
///
/// Produced by [`greedy_coloring`](crate::coloring::greedy_coloring);
/// callers may also build one by hand to schedule a fixed allocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorAssignment {
    colors: Vec<usize>,
}

impl ColorAssignment {
    /// Wraps a color vector.
    pub fn new(colors: Vec<usize>) -> Self {
        Self { colors }
    }

    /// Color of `task`, or `None` if out of range.
    #[inline]
    pub fn color_of(&self, task: usize) -> Option<usize> {
        self.colors.get(task).copied()
    }

    /// Number of tasks covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no task is covered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.colors
    }

    /// Largest color id, or `None` if empty.
    pub fn max_color(&self) -> Option<usize> {
        self.colors.iter().copied().max()
    }

    /// Number of distinct colors.
    pub fn colors_used(&self) -> usize {
        self.colors.iter().collect::<BTreeSet<_>>().len()
    }

    /// Tasks holding `color`, ascending.
    pub fn tasks_with_color(&self, color: usize) -> Vec<usize> {
        self.colors
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == color)
            .map(|(task, _)| task)
            .collect()
    }

    /// Edges of `graph` whose endpoints share a color.
    ///
    /// Edges touching a task outside this assignment are skipped.
    pub fn conflicts(&self, graph: &DependencyGraph) -> Vec<(usize, usize)> {
        graph
            .edges()
            .filter(|&(i, j)| match (self.color_of(i), self.color_of(j)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            })
            .collect()
    }

    /// Whether this assignment covers every task of `graph` and no edge
    /// joins two tasks of the same color.
    pub fn is_proper(&self, graph: &DependencyGraph) -> bool {
        self.len() == graph.node_count() && self.conflicts(graph).is_empty()
    }
}

impl From<Vec<usize>> for ColorAssignment {
    fn from(colors: Vec<usize>) -> Self {
        Self::new(colors)
    }
}
