//! Tabular exports for rendering and download collaborators.
//!
//! - `timeline_csv`: the execution timeline as CSV with header
//!   `Task,Start,Finish,Resource`
//! - `allocation_table`: one `(Task {i+1}, color)` row per task

use crate::models::{ColorAssignment, Schedule, Task};

/// Header row of [`timeline_csv`].
pub const TIMELINE_HEADER: &str = "Task,Start,Finish,Resource";

/// Renders the timeline as CSV, one row per entry in schedule order.
///
/// The `Task` column carries the description. Rows end with `\n`.
///
/// # Example
///
/// ```
/// use task_allot::export::timeline_csv;
/// use task_allot::models::{Schedule, ScheduleEntry};
///
/// let schedule = Schedule {
///     entries: vec![ScheduleEntry::new(0, "Design, v2", 0, 3, 1)],
///     overdue: vec![],
/// };
/// assert_eq!(
///     timeline_csv(&schedule),
///     "Task,Start,Finish,Resource\n\"Design, v2\",0,3,Resource 2\n"
/// );
/// ```
pub fn timeline_csv(schedule: &Schedule) -> String {
    let mut out = String::with_capacity(32 * (schedule.entries.len() + 1));
    out.push_str(TIMELINE_HEADER);
    out.push('\n');

    for entry in &schedule.entries {
        out.push_str(&csv_field(&entry.description));
        out.push(',');
        out.push_str(&entry.start.to_string());
        out.push(',');
        out.push_str(&entry.finish.to_string());
        out.push(',');
        out.push_str(&csv_field(&entry.resource));
        out.push('\n');
    }
    out
}

/// Allocation overview: `(Task {i+1}, color)` for every task.
pub fn allocation_table(colors: &ColorAssignment) -> Vec<(String, usize)> {
    colors
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &color)| (Task::default_description(i), color))
        .collect()
}

/// Quotes a field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
