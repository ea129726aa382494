//! Outcome lines for player actions.

use std::fmt;

use crate::{
    engine::RecipeEngine,
    models::{Step, StepId},
};

/// What happened after a player action, and where the session stands now.
///
/// Renders as a `Success:` or `Error:` line. After a completed step it also
/// shows the game state the session has reached and, once every step is
/// done, a closing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    message: String,
    success: bool,
    state: Option<String>,
    finished: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            state: None,
            finished: false,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            state: None,
            finished: false,
        }
    }

    /// Outcome of completing step `id` in `engine`.
    pub fn step_completed(engine: &RecipeEngine, id: StepId) -> Self {
        let message = match engine.step_by_id(id) {
            Some(Step {
                action,
                item: Some(item),
                ..
            }) => format!("Completed step {id}. {action} {item}"),
            Some(Step { action, .. }) => format!("Completed step {id}. {action}"),
            None => format!("Completed step {id}"),
        };
        Self {
            state: engine.state().map(ToString::to_string),
            finished: engine.is_finished(),
            ..Self::success(message)
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)?;
        if let Some(state) = &self.state {
            writeln!(f, "State: {state}")?;
        }
        if self.finished {
            writeln!(f, "\nRecipe complete!")?;
        }
        Ok(())
    }
}
