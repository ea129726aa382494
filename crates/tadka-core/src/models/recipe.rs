//! Recipe model definition, loading and validation.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use log::debug;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Step, StepId};
use crate::error::{RecipeError, Result};

const UNTITLED: &str = "Untitled recipe";

/// A static recipe definition: an ordered list of steps forming a
/// prerequisite graph.
///
/// Step order is the authoring order. It breaks ties between eligible steps
/// but does not constrain execution order; `requires` does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Recipe {
    /// Display name of the recipe
    #[serde(default)]
    pub name: String,

    /// Optional description shown with the recipe overview
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Steps in authoring order
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Create a recipe from a name and its steps.
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            description: None,
            steps,
        }
    }

    /// Parse a recipe from JSON text.
    ///
    /// Parsing does not validate the prerequisite graph; see
    /// [`Recipe::validate`]. A missing `name` stays empty, and headings fall
    /// back to [`Recipe::title`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a recipe file.
    ///
    /// A recipe without a `name` takes the file stem as its name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| RecipeError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut recipe = Self::from_json_str(&json)?;
        if recipe.name.is_empty() {
            if let Some(stem) = path.file_stem() {
                recipe.name = stem.to_string_lossy().into_owned();
            }
        }
        debug!(
            "Loaded recipe '{}' with {} steps from {}",
            recipe.name,
            recipe.steps.len(),
            path.display()
        );
        Ok(recipe)
    }

    /// Name to show in headings; "Untitled recipe" when the name is empty.
    pub fn title(&self) -> &str {
        if self.name.is_empty() {
            UNTITLED
        } else {
            &self.name
        }
    }

    /// Look up a step by ID.
    pub fn step(&self, id: StepId) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check that the recipe can be played to the end.
    ///
    /// # Errors
    ///
    /// - `EmptyRecipe` if there are no steps
    /// - `DuplicateStep` if two steps share an ID
    /// - `UnknownPrerequisite` if a step requires an ID that does not exist
    /// - `CyclicPrerequisites` if some steps can never become eligible
    pub fn validate(&self) -> Result<()> {
        self.execution_order().map(|_| ())
    }

    /// Order in which every step can be completed, preferring authoring order
    /// whenever several steps are ready at once.
    ///
    /// This is the order a player following [`crate::RecipeEngine::current_step`]
    /// would complete the recipe in.
    pub fn execution_order(&self) -> Result<Vec<StepId>> {
        if self.steps.is_empty() {
            return Err(RecipeError::EmptyRecipe);
        }

        let mut index: HashMap<StepId, usize> = HashMap::with_capacity(self.steps.len());
        for (position, step) in self.steps.iter().enumerate() {
            if index.insert(step.id, position).is_some() {
                return Err(RecipeError::DuplicateStep { id: step.id });
            }
        }

        // Edges run from prerequisite to dependent; repeated requirements
        // count once.
        let mut pending = vec![0usize; self.steps.len()];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); self.steps.len()];
        for (position, step) in self.steps.iter().enumerate() {
            let unique: HashSet<StepId> = step.requires.iter().copied().collect();
            for required in unique {
                let Some(&from) = index.get(&required) else {
                    return Err(RecipeError::UnknownPrerequisite {
                        step: step.id,
                        requires: required,
                    });
                };
                dependents[from].push(position);
                pending[position] += 1;
            }
        }

        let mut ready: BTreeSet<usize> = pending
            .iter()
            .enumerate()
            .filter(|(_, count)| **count == 0)
            .map(|(position, _)| position)
            .collect();
        let mut order = Vec::with_capacity(self.steps.len());

        while let Some(position) = ready.pop_first() {
            order.push(self.steps[position].id);
            for &dependent in &dependents[position] {
                pending[dependent] -= 1;
                if pending[dependent] == 0 {
                    ready.insert(dependent);
                }
            }
        }

        if order.len() < self.steps.len() {
            let steps = self
                .steps
                .iter()
                .zip(&pending)
                .filter(|(_, count)| **count > 0)
                .map(|(step, _)| step.id)
                .collect();
            return Err(RecipeError::CyclicPrerequisites { steps });
        }

        Ok(order)
    }
}
