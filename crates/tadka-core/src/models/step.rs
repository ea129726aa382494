//! Step model definition and related functionality.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier of a step, unique within its recipe.
pub type StepId = u64;

/// A single atomic action within a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Step {
    /// Unique identifier for the step
    pub id: StepId,

    /// Symbolic verb, e.g. "chop", "add", "fry"
    pub action: String,

    /// Symbolic target of the action, e.g. "potato"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,

    /// Steps that must be completed before this one becomes eligible
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<StepId>,

    /// Game state entered once this step completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Selectable variants, e.g. spice amounts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Hints shown while this step is the active target
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

impl Step {
    /// Create a step with only an ID and an action.
    pub fn new(id: StepId, action: impl Into<String>) -> Self {
        Self {
            id,
            action: action.into(),
            item: None,
            requires: Vec::new(),
            state: None,
            options: Vec::new(),
            hints: Vec::new(),
        }
    }

    /// Set the target item.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    /// Set the prerequisite step IDs.
    pub fn with_requires(mut self, requires: impl IntoIterator<Item = StepId>) -> Self {
        self.requires = requires.into_iter().collect();
        self
    }

    /// Set the game state entered on completion.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Set the selectable options.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Set the hints.
    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints = hints.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this step's action and, if given, item match exactly.
    pub fn matches(&self, action: &str, item: Option<&str>) -> bool {
        self.action == action && item.map_or(true, |item| self.item.as_deref() == Some(item))
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}
