//! Session mutations: completing steps and resetting.

use log::{debug, warn};

use super::RecipeEngine;
use crate::{
    error::{RecipeError, Result},
    ingredients,
    models::{IngredientValue, Step, StepId},
    params::{CompleteStep, PerformAction},
};

impl RecipeEngine {
    /// Marks step `id` as completed and applies its effects.
    ///
    /// The step's `state`, if any, becomes the current state. When `option`
    /// is given and the step offers options, the choice is recorded for the
    /// step. When the step targets an item that is not equipment, the item
    /// is recorded as an ingredient with `option` as its value.
    ///
    /// Prerequisites are not checked here; callers decide which steps to
    /// offer. Completing a step again leaves the completed set as it is but
    /// applies the effects again.
    ///
    /// # Errors
    ///
    /// Returns `StepNotFound` if the recipe has no step `id`. The session is
    /// left untouched.
    pub fn complete_step(&mut self, id: StepId, option: Option<&str>) -> Result<()> {
        let Some(step) = self.recipe.step(id) else {
            warn!("Ignoring completion of unknown step {id}");
            return Err(RecipeError::StepNotFound { id });
        };

        if !self.completed.insert(id) {
            debug!("Step {id} completed again; re-applying its effects");
        }

        if let Some(state) = &step.state {
            self.current_state = Some(state.clone());
        }

        if let Some(option) = option {
            if step.has_options() {
                self.selected_options.insert(id, option.to_string());
            }
        }

        if let Some(item) = &step.item {
            if !ingredients::is_equipment(item) {
                self.ingredients
                    .insert(item.clone(), IngredientValue::from_option(option));
            }
        }

        debug!(
            "Completed step {id} ({} {}), {}/{} done",
            step.action,
            step.item.as_deref().unwrap_or("-"),
            self.completed.len(),
            self.recipe.steps.len()
        );
        Ok(())
    }

    /// [`RecipeEngine::complete_step`] taking parameters from a front end.
    pub fn complete(&mut self, params: &CompleteStep) -> Result<()> {
        self.complete_step(params.id, params.option.as_deref())
    }

    /// Completes the first eligible step the player's action satisfies.
    ///
    /// The action must match exactly. The item, when given, may be any name
    /// accepted by [`ingredients::validate_ingredient`] for the step's item,
    /// so `haldi` completes a step that adds `turmeric`. When the step
    /// offers options, `option` must be one of them.
    ///
    /// # Errors
    ///
    /// - `ActionNotAvailable` if no eligible step matches
    /// - `InvalidInput` if `option` is not one the step offers
    ///
    /// Either way the session is left untouched.
    pub fn perform_action(
        &mut self,
        action: &str,
        item: Option<&str>,
        option: Option<&str>,
    ) -> Result<&Step> {
        let step = self
            .next_steps()
            .into_iter()
            .find(|step| step.action == action && item_satisfies(step, item))
            .ok_or_else(|| RecipeError::ActionNotAvailable {
                action: action.to_string(),
                item: item.map(ToString::to_string),
            })?;

        if let Some(option) = option {
            if step.has_options() && !step.options.iter().any(|o| o == option) {
                return Err(RecipeError::invalid_input("option").with_reason(format!(
                    "'{option}' is not offered for step {} (choose from {})",
                    step.id,
                    step.options.join(", ")
                )));
            }
        }

        let id = step.id;
        self.complete_step(id, option)?;
        self.recipe
            .step(id)
            .ok_or(RecipeError::StepNotFound { id })
    }

    /// [`RecipeEngine::perform_action`] taking parameters from a front end.
    pub fn perform(&mut self, params: &PerformAction) -> Result<&Step> {
        self.perform_action(
            &params.action,
            params.item.as_deref(),
            params.option.as_deref(),
        )
    }

    /// Starts the session over.
    ///
    /// Clears completed steps, the current state, recorded ingredients and
    /// chosen options. The recipe itself is unchanged.
    pub fn reset(&mut self) {
        debug!("Resetting session for recipe '{}'", self.recipe.name);
        self.completed.clear();
        self.current_state = None;
        self.ingredients.clear();
        self.selected_options.clear();
    }
}

fn item_satisfies(step: &Step, item: Option<&str>) -> bool {
    match (item, step.item.as_deref()) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(actual), Some(expected)) => ingredients::validate_ingredient(actual, Some(expected)),
    }
}
