//! Display palette: folds color ids onto a bounded set of resources.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::ColorAssignment;
use crate::validation::ValidationErrorKind;
use crate::AllocationError;

/// A fixed set of `k` display resources.
///
/// Color `c` is shown as slot `c % k`. When the coloring uses more than
/// `k` colors, structurally different colors share a slot; this is a
/// lossy presentation step, not a coloring guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePalette {
    resource_count: usize,
}

impl ResourcePalette {
    /// Creates a palette with `resource_count` slots.
    ///
    /// # Errors
    /// `InvalidParameter` if `resource_count` is zero.
    pub fn new(resource_count: usize) -> Result<Self, AllocationError> {
        if resource_count == 0 {
            return Err(AllocationError::invalid(
                ValidationErrorKind::OutOfRange,
                "Number of resources must be at least 1",
            ));
        }
        Ok(Self { resource_count })
    }

    /// Number of display slots.
    #[inline]
    pub fn resource_count(&self) -> usize {
        self.resource_count
    }

    /// Display slot of `color`.
    #[inline]
    pub fn slot(&self, color: usize) -> usize {
        color % self.resource_count
    }

    /// Display label of `color`: `Resource {slot+1}`.
    pub fn label(&self, color: usize) -> String {
        format!("Resource {}", self.slot(color) + 1)
    }

    /// All slot labels, `Resource 1` through `Resource k`.
    pub fn labels(&self) -> Vec<String> {
        (0..self.resource_count).map(|c| self.label(c)).collect()
    }

    /// Display slot of every task.
    pub fn fold(&self, colors: &ColorAssignment) -> Vec<usize> {
        colors.as_slice().iter().map(|&c| self.slot(c)).collect()
    }

    /// Whether any two distinct colors of `colors` land on the same slot.
    pub fn is_lossy(&self, colors: &ColorAssignment) -> bool {
        let distinct: BTreeSet<usize> = colors.as_slice().iter().copied().collect();
        let slots: BTreeSet<usize> = distinct.iter().map(|&c| self.slot(c)).collect();
        slots.len() < distinct.len()
    }
}
