//! Allocation domain models.
//!
//! Provides the data types for describing an allocation problem
//! (tasks and the conflict graph between them) and its solution
//! (a resource coloring and a timeline).
//!
//! # Domain Mappings
//!
//! | task-allot | Project Management | Exam Timetabling | Register Allocation |
//! |------------|--------------------|------------------|---------------------|
//! | Task | Work Item | Exam | Variable |
//! | Conflict edge | Shared dependency | Shared student | Overlapping lifetime |
//! | Color | Team/Resource | Time Slot | Register |
//! | Schedule | Gantt Timeline | Exam Calendar | — |

mod coloring;
mod graph;
mod schedule;
mod task;

pub use coloring::ColorAssignment;
pub use graph::DependencyGraph;
pub use schedule::{resource_label, Schedule, ScheduleEntry};
pub use task::Task;
