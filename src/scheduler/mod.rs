//! Timeline scheduling and KPI evaluation.
//!
//! Turns a conflict graph, per-task metadata and a color assignment into
//! start/finish times, and flags tasks that miss their deadlines.
//!
//! # Algorithm
//!
//! `PriorityScheduler` visits tasks once in stable priority order and starts
//! each one after the latest known finish of its conflict neighbors. It is
//! a single pass, not a topological traversal; see [`PriorityScheduler`].
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, tardiness, on-time rate, busy time per
//! resource and flow time.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod kpi;
mod priority;

pub use kpi::ScheduleKpi;
pub use priority::{priority_order, schedule, PriorityScheduler};
