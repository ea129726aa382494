//! Session progress counters.

use serde::{Deserialize, Serialize};

/// Completion progress through a recipe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    /// Number of steps in the recipe
    pub total: usize,
    /// Number of steps completed this session
    pub completed: usize,
    /// `completed / total * 100`
    pub percentage: f64,
}

impl Progress {
    pub fn new(total: usize, completed: usize) -> Self {
        let percentage = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total,
            completed,
            percentage,
        }
    }

    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}
