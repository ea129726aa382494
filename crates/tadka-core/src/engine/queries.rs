//! Read-only session queries.
//!
//! None of these fail: absence is reported as `None`, `false` or an empty
//! slice, so a renderer can call any of them unconditionally.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::RecipeEngine;
use crate::{
    ingredients,
    models::{IngredientValue, Progress, Recipe, SessionSnapshot, Step, StepCriteria, StepId},
};

impl RecipeEngine {
    fn eligible_steps(&self) -> impl Iterator<Item = &Step> + '_ {
        self.recipe
            .steps
            .iter()
            .filter(|step| !self.completed.contains(&step.id) && self.prerequisites_met(step))
    }

    /// The first eligible step in authoring order.
    ///
    /// `None` once the recipe is finished.
    pub fn current_step(&self) -> Option<&Step> {
        self.eligible_steps().next()
    }

    /// Every eligible step, in authoring order.
    ///
    /// More than one step is returned when the recipe branches and the
    /// player may pick any of them.
    pub fn next_steps(&self) -> Vec<&Step> {
        self.eligible_steps().collect()
    }

    /// Whether some eligible step has this action and, when `item` is given,
    /// exactly this item.
    pub fn can_perform_action(&self, action: &str, item: Option<&str>) -> bool {
        self.eligible_steps().any(|step| step.matches(action, item))
    }

    /// Options offered by the first eligible step matching `action` on
    /// `item`. Empty if nothing matches or the step offers no options.
    pub fn options_for_action(&self, action: &str, item: &str) -> &[String] {
        self.eligible_steps()
            .find(|step| step.matches(action, Some(item)))
            .map(|step| step.options.as_slice())
            .unwrap_or_default()
    }

    /// Whether every step `step` requires has been completed.
    pub fn prerequisites_met(&self, step: &Step) -> bool {
        step.requires.iter().all(|id| self.completed.contains(id))
    }

    /// Hints for the current step.
    pub fn hints(&self) -> &[String] {
        self.current_step()
            .map(|step| step.hints.as_slice())
            .unwrap_or_default()
    }

    /// Alias of [`RecipeEngine::hints`].
    pub fn current_hints(&self) -> &[String] {
        self.hints()
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.recipe.steps.len(), self.completed.len())
    }

    /// The last game state set by a completed step.
    pub fn state(&self) -> Option<&str> {
        self.current_state.as_deref()
    }

    pub fn step_by_id(&self, id: StepId) -> Option<&Step> {
        self.recipe.step(id)
    }

    /// Every step matching all set fields of `criteria`, in authoring order.
    pub fn find_steps(&self, criteria: &StepCriteria) -> Vec<&Step> {
        self.recipe
            .steps
            .iter()
            .filter(|step| criteria.matches(step))
            .collect()
    }

    /// See [`ingredients::validate_ingredient`].
    pub fn validate_ingredient(actual: &str, expected: Option<&str>) -> bool {
        ingredients::validate_ingredient(actual, expected)
    }

    /// Ingredients recorded by completed steps. Equipment is never recorded.
    pub fn ingredients(&self) -> &BTreeMap<String, IngredientValue> {
        &self.ingredients
    }

    pub fn ingredient(&self, item: &str) -> Option<&IngredientValue> {
        self.ingredients.get(item)
    }

    /// The option the player chose when completing step `id`.
    pub fn selected_option(&self, id: StepId) -> Option<&str> {
        self.selected_options.get(&id).map(String::as_str)
    }

    pub fn completed_steps(&self) -> &BTreeSet<StepId> {
        &self.completed
    }

    pub fn is_completed(&self, id: StepId) -> bool {
        self.completed.contains(&id)
    }

    /// Whether every step of the recipe has been completed.
    pub fn is_finished(&self) -> bool {
        self.recipe
            .steps
            .iter()
            .all(|step| self.completed.contains(&step.id))
    }

    /// Whether steps remain but none of them can be performed.
    ///
    /// Never true for a recipe that passed validation, even after
    /// out-of-order [`RecipeEngine::complete_step`] calls.
    pub fn is_stalled(&self) -> bool {
        !self.is_finished() && self.current_step().is_none()
    }

    pub fn recipe(&self) -> &Arc<Recipe> {
        &self.recipe
    }

    /// Copy of the whole session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            recipe: self.recipe.title().to_string(),
            completed_steps: self.completed.iter().copied().collect(),
            state: self.current_state.clone(),
            next_steps: self.next_steps().into_iter().cloned().collect(),
            hints: self.hints().to_vec(),
            ingredients: self.ingredients.clone(),
            selected_options: self.selected_options.clone(),
            progress: self.progress(),
        }
    }
}
