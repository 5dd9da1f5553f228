//! Random conflict graphs.
//!
//! Erdős–Rényi G(n, p): every unordered pair of tasks becomes a conflict
//! edge independently with probability `p`.
//!
//! # Reference
//! Gilbert (1959), "Random Graphs"

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::DependencyGraph;
use crate::validation::{self, Limits};
use crate::AllocationError;

/// Samples a G(n, p) graph from `rng`.
///
/// `n` is checked against the default [`Limits`].
///
/// # Errors
/// `InvalidParameter` if `n` lies outside `[1, max_nodes]` or `p` outside
/// `[0, 1]`. Both problems are reported together.
pub fn gnp_graph<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    rng: &mut R,
) -> Result<DependencyGraph, AllocationError> {
    let mut errors = Vec::new();
    if let Err(e) = validation::validate_node_count(n, &Limits::default()) {
        errors.extend(e);
    }
    if let Err(e) = validation::validate_probability(p) {
        errors.extend(e);
    }
    if !errors.is_empty() {
        return Err(AllocationError::InvalidParameter(errors));
    }

    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(p) {
                edges.push((i, j));
            }
        }
    }

    debug!(nodes = n, probability = p, edges = edges.len(), "generated graph");
    DependencyGraph::from_edges(n, edges)
}

/// Samples a reproducible G(n, p) graph from `seed`.
///
/// # Errors
/// Same as [`gnp_graph`].
pub fn seeded_gnp_graph(n: usize, p: f64, seed: u64) -> Result<DependencyGraph, AllocationError> {
    let mut rng = StdRng::seed_from_u64(seed);
    gnp_graph(n, p, &mut rng)
}
