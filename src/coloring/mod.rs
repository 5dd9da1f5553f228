//! Greedy conflict-graph coloring and display folding.
//!
//! Each color is a resource: tasks joined by a conflict edge never share
//! one. The coloring is greedy in task-index order, so it is fast and
//! deterministic but may use more colors than the chromatic number.
//!
//! The resource count `k` is a display concern only. Colors at or beyond
//! `k` are folded onto `color % k` by [`ResourcePalette`]; the coloring
//! itself is never capped.
//!
//! # Usage
//!
//! ```
//! use task_allot::coloring::{greedy_coloring, ResourcePalette};
//! use task_allot::models::DependencyGraph;
//!
//! let graph = DependencyGraph::from_edges(3, [(0, 1), (0, 2), (1, 2)]).unwrap();
//! let colors = greedy_coloring(&graph).unwrap();
//! assert_eq!(colors.as_slice(), &[0, 1, 2]);
//!
//! let palette = ResourcePalette::new(2).unwrap();
//! assert_eq!(palette.fold(&colors), vec![0, 1, 0]);
//! ```
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"

mod greedy;
mod palette;

pub use greedy::{color, greedy_coloring};
pub use palette::ResourcePalette;
