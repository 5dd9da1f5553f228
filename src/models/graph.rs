//! Conflict graph between tasks.
//!
//! An undirected graph over task indices `0..n`. An edge `(i, j)` means
//! tasks `i` and `j` must not share a resource. Despite the "dependency"
//! name the relation carries no direction and no precedence.
//!
//! # Invariants
//! - No self-loops: `adj(i, i) = 0`
//! - Symmetric: `adj(i, j) = adj(j, i)`
//! - Neighbor lists are sorted ascending and free of duplicates

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationErrorKind};
use crate::AllocationError;

/// Undirected conflict graph over `n` tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphDocument", into = "GraphDocument")]
pub struct DependencyGraph {
    adjacency: Vec<Vec<usize>>,
}

/// Wire form: node count plus an edge list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphDocument {
    node_count: usize,
    #[serde(default)]
    edges: Vec<(usize, usize)>,
}

impl TryFrom<GraphDocument> for DependencyGraph {
    type Error = AllocationError;

    fn try_from(doc: GraphDocument) -> Result<Self, Self::Error> {
        Self::from_edges(doc.node_count, doc.edges)
    }
}

impl From<DependencyGraph> for GraphDocument {
    fn from(graph: DependencyGraph) -> Self {
        Self {
            node_count: graph.node_count(),
            edges: graph.edges().collect(),
        }
    }
}

impl DependencyGraph {
    /// Creates a graph with `n` tasks and no conflicts.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
        }
    }

    /// Builds a graph from an edge list.
    ///
    /// Edges are undirected; `(i, j)` and `(j, i)` are the same edge and
    /// duplicates are ignored.
    ///
    /// # Errors
    /// `InvalidParameter` when an endpoint is `>= n` or an edge is a self-loop.
    pub fn from_edges(
        n: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, AllocationError> {
        let mut graph = Self::new(n);
        let mut errors = Vec::new();

        for (i, j) in edges {
            if i >= n || j >= n {
                errors.push(ValidationError::new(
                    ValidationErrorKind::IndexOutOfRange,
                    format!("Edge ({i}, {j}) references a task outside 0..{n}"),
                ));
            } else if i == j {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfLoop,
                    format!("Task {i} cannot conflict with itself"),
                ));
            } else {
                graph.adjacency[i].push(j);
                graph.adjacency[j].push(i);
            }
        }

        if !errors.is_empty() {
            return Err(AllocationError::InvalidParameter(errors));
        }

        for neighbors in &mut graph.adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        Ok(graph)
    }

    /// Builds a graph from a 0/1 adjacency matrix.
    ///
    /// # Errors
    /// `InvalidParameter` when the matrix is not square, holds a value other
    /// than 0 or 1, has a non-zero diagonal, or is not symmetric.
    pub fn from_adjacency_matrix(matrix: &[Vec<u8>]) -> Result<Self, AllocationError> {
        let n = matrix.len();
        let mut errors = Vec::new();

        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NotSquare,
                    format!("Row {i} has {} entries, expected {n}", row.len()),
                ));
            }
        }
        if !errors.is_empty() {
            return Err(AllocationError::InvalidParameter(errors));
        }

        let mut edges = Vec::new();
        for i in 0..n {
            for j in 0..n {
                let value = matrix[i][j];
                if value > 1 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidEntry,
                        format!("Entry ({i}, {j}) is {value}, expected 0 or 1"),
                    ));
                } else if i == j && value == 1 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::SelfLoop,
                        format!("Task {i} cannot conflict with itself"),
                    ));
                } else if i < j && value != matrix[j][i] {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::Asymmetric,
                        format!("Entries ({i}, {j}) and ({j}, {i}) differ"),
                    ));
                } else if i < j && value == 1 {
                    edges.push((i, j));
                }
            }
        }

        if !errors.is_empty() {
            return Err(AllocationError::InvalidParameter(errors));
        }
        Self::from_edges(n, edges)
    }

    /// Number of tasks.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no tasks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Conflicting tasks of `node`, ascending. Empty for unknown nodes.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of conflicts of `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }

    /// Largest degree in the graph (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether `i` and `j` conflict.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.neighbors(i).binary_search(&j).is_ok()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Undirected edges as `(i, j)` with `i < j`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&j| j > i)
                .map(move |j| (i, j))
        })
    }

    /// The 0/1 adjacency matrix.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.node_count();
        let mut matrix = vec![vec![0u8; n]; n];
        for (i, j) in self.edges() {
            matrix[i][j] = 1;
            matrix[j][i] = 1;
        }
        matrix
    }
}
