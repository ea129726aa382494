//! Serializable view of an engine session.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{IngredientValue, Progress, Step, StepId};

/// Copy of a session's state at one point in time, for renderers and tools
/// that want everything in one value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionSnapshot {
    /// Name of the recipe being played
    pub recipe: String,
    /// Completed step IDs, ascending
    pub completed_steps: Vec<StepId>,
    /// Last state set by a completed step
    pub state: Option<String>,
    /// Steps that may be performed now, in authoring order
    pub next_steps: Vec<Step>,
    /// Hints for the current step
    pub hints: Vec<String>,
    /// Ingredients recorded so far
    pub ingredients: BTreeMap<String, IngredientValue>,
    /// Options chosen per step
    pub selected_options: BTreeMap<StepId, String>,
    pub progress: Progress,
}
