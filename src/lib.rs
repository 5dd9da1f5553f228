//! Resource allocation for interdependent tasks.
//!
//! Assigns a bounded set of reusable resources to tasks linked by conflict
//! edges, then lays the tasks out on a timeline and reports deadline misses.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `DependencyGraph`, `ColorAssignment`,
//!   `Schedule`, `ScheduleEntry`
//! - **`coloring`**: Greedy conflict-graph coloring and the display palette
//! - **`scheduler`**: Priority-pass start/finish computation and KPIs
//! - **`allocation`**: One-shot pipeline driven by an immutable `AllocationRequest`
//! - **`generator`**: Random G(n, p) conflict graphs
//! - **`export`**: CSV timeline and allocation tables
//! - **`validation`**: Input range and shape checks (`Limits`)
//!
//! # Example
//!
//! ```
//! use task_allot::allocation::{allocate, AllocationRequest};
//! use task_allot::models::{DependencyGraph, Task};
//!
//! let graph = DependencyGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
//! let tasks = vec![
//!     Task::new(2, 10, 1),
//!     Task::new(3, 10, 2),
//!     Task::new(1, 10, 3),
//! ];
//! let allocation = allocate(&AllocationRequest::new(graph, tasks)).unwrap();
//!
//! assert_eq!(allocation.colors.as_slice(), &[0, 1, 0]);
//! assert!(allocation.schedule.overdue.is_empty());
//! ```
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod allocation;
pub mod coloring;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::AllocationError;
