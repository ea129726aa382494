//! Error types for the recipe engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::StepId;

/// Error type for recipe loading, validation and engine operations.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// No step with the given ID exists in the recipe
    #[error("Step with ID {id} not found")]
    StepNotFound { id: StepId },
    /// No eligible step matches the attempted action
    #[error("No eligible step for action '{action}'{}", fmt_item(.item))]
    ActionNotAvailable {
        action: String,
        item: Option<String>,
    },
    /// The recipe defines no steps
    #[error("Recipe has no steps")]
    EmptyRecipe,
    /// Two steps share the same ID
    #[error("Step ID {id} is defined more than once")]
    DuplicateStep { id: StepId },
    /// A step requires a step that does not exist
    #[error("Step {step} requires unknown step {requires}")]
    UnknownPrerequisite { step: StepId, requires: StepId },
    /// The prerequisite graph contains a cycle
    #[error("Prerequisite cycle blocks steps {}", fmt_ids(.steps))]
    CyclicPrerequisites { steps: Vec<StepId> },
    /// A named recipe could not be located
    #[error("Recipe '{name}' not found in {}", .dir.display())]
    RecipeNotFound { name: String, dir: PathBuf },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn fmt_item(item: &Option<String>) -> String {
    match item {
        Some(item) => format!(" on '{item}'"),
        None => String::new(),
    }
}

fn fmt_ids(ids: &[StepId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RecipeError {
        RecipeError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RecipeError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// True for errors caused by a malformed recipe definition.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RecipeError::EmptyRecipe
                | RecipeError::DuplicateStep { .. }
                | RecipeError::UnknownPrerequisite { .. }
                | RecipeError::CyclicPrerequisites { .. }
                | RecipeError::Configuration { .. }
        )
    }

    /// True for lookups that found nothing to act on. Callers ignore the
    /// attempted action and keep going.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            RecipeError::StepNotFound { .. } | RecipeError::ActionNotAvailable { .. }
        )
    }
}

/// Result type alias for recipe operations
pub type Result<T> = std::result::Result<T, RecipeError>;
