//! Filter types for querying steps.

use super::{Step, StepId};

/// Exact-match criteria for [`crate::RecipeEngine::find_steps`].
///
/// Every field that is set must equal the corresponding step field; unset
/// fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepCriteria {
    pub id: Option<StepId>,
    pub action: Option<String>,
    pub item: Option<String>,
    pub state: Option<String>,
}

impl StepCriteria {
    /// Criteria matching steps with the given action.
    pub fn action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Default::default()
        }
    }

    /// Criteria matching steps that target the given item.
    pub fn item(item: impl Into<String>) -> Self {
        Self {
            item: Some(item.into()),
            ..Default::default()
        }
    }

    /// Narrow to steps that also target the given item.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    /// Narrow to steps that also set the given state.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Whether a step satisfies every set criterion.
    pub fn matches(&self, step: &Step) -> bool {
        self.id.map_or(true, |id| step.id == id)
            && self.action.as_ref().map_or(true, |a| &step.action == a)
            && self
                .item
                .as_ref()
                .map_or(true, |i| step.item.as_ref() == Some(i))
            && self
                .state
                .as_ref()
                .map_or(true, |s| step.state.as_ref() == Some(s))
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
