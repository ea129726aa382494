//! Recipe progression engine.
//!
//! This module provides [`RecipeEngine`], which tracks one play session
//! through a static [`Recipe`]: which steps are done, which may be performed
//! next, and what game state the completed steps have produced.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  EngineBuilder  │    │  RecipeEngine   │    │   Scene / CLI   │
//! │ (load, validate)│───▶│ (queries,       │◀──▶│ (polls queries, │
//! │                 │    │  actions)       │    │  completes)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Loads a recipe from memory, a file or the recipe directory
//! - [`queries`]: Read-only questions about the session
//! - [`actions`]: Completing steps and resetting the session
//!
//! Eligibility is recomputed from the full step list on every query. Recipes
//! are tens of steps long, so there is no incremental bookkeeping to keep in
//! sync with the completed set.
//!
//! The recipe is held behind an [`Arc`] and never written to; choices the
//! player makes are kept in the engine. Several sessions can therefore play
//! the same recipe value at once.
//!
//! # Usage
//!
//! ```rust
//! use tadka_core::{Recipe, RecipeEngine, Step};
//!
//! let recipe = Recipe::new(
//!     "Fried potato",
//!     vec![
//!         Step::new(1, "chop").with_item("potato"),
//!         Step::new(2, "fry").with_item("potato").with_requires([1]),
//!     ],
//! );
//! let mut engine = RecipeEngine::new(recipe)?;
//!
//! assert!(engine.can_perform_action("chop", Some("potato")));
//! engine.complete_step(1, None)?;
//! assert_eq!(engine.next_steps()[0].id, 2);
//! assert_eq!(engine.progress().percentage, 50.0);
//! # Ok::<(), tadka_core::RecipeError>(())
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::{
    error::Result,
    models::{IngredientValue, Recipe, StepId},
};

pub mod actions;
pub mod builder;
pub mod queries;


pub use builder::{available_recipes, EngineBuilder};

/// Session state for one play-through of a recipe.
#[derive(Debug, Clone)]
pub struct RecipeEngine {
    pub(crate) recipe: Arc<Recipe>,
    pub(crate) completed: BTreeSet<StepId>,
    pub(crate) current_state: Option<String>,
    pub(crate) ingredients: BTreeMap<String, IngredientValue>,
    pub(crate) selected_options: BTreeMap<StepId, String>,
}

impl RecipeEngine {
    /// Creates an engine for a fresh session over `recipe`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the recipe has no steps, repeats a
    /// step ID, requires an unknown step, or has a prerequisite cycle. Such
    /// recipes could never be finished.
    pub fn new(recipe: impl Into<Arc<Recipe>>) -> Result<Self> {
        let recipe = recipe.into();
        recipe.validate()?;
        Ok(Self {
            recipe,
            completed: BTreeSet::new(),
            current_state: None,
            ingredients: BTreeMap::new(),
            selected_options: BTreeMap::new(),
        })
    }
}
