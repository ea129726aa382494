//! Tests for recipe models.

use super::*;
use crate::error::RecipeError;

fn potato_recipe() -> Recipe {
    Recipe::new(
        "Fried potato",
        vec![
            Step::new(1, "chop").with_item("potato"),
            Step::new(2, "fry").with_item("potato").with_requires([1]),
        ],
    )
}

#[test]
fn test_recipe_from_json_defaults() {
    let recipe = Recipe::from_json_str(
        r#"{
            "name": "Jeera aloo",
            "steps": [
                {"id": 1, "action": "place", "item": "pan"},
                {"id": 2, "action": "add", "item": "zeera", "requires": [1],
                 "options": ["1tsp", "2tsp"], "hints": ["Tap the spice rack"],
                 "state": "tempering"}
            ]
        }"#,
    )
    .expect("Failed to parse recipe");

    assert_eq!(recipe.name, "Jeera aloo");
    assert_eq!(recipe.description, None);
    assert_eq!(recipe.len(), 2);

    let first = recipe.step(1).expect("step 1");
    assert!(first.requires.is_empty());
    assert!(first.options.is_empty());
    assert!(first.hints.is_empty());
    assert_eq!(first.state, None);

    let second = recipe.step(2).expect("step 2");
    assert_eq!(second.requires, vec![1]);
    assert_eq!(second.options, vec!["1tsp", "2tsp"]);
    assert_eq!(second.state.as_deref(), Some("tempering"));
}

#[test]
fn test_recipe_without_steps_fails_to_parse() {
    let result = Recipe::from_json_str(r#"{"name": "Nothing"}"#);
    assert!(matches!(result, Err(RecipeError::Serialization { .. })));
}

#[test]
fn test_step_serialization_skips_empty_fields() {
    let json = serde_json::to_string(&Step::new(4, "stir")).expect("serialize");
    assert_eq!(json, r#"{"id":4,"action":"stir"}"#);
}

#[test]
fn test_execution_order_follows_prerequisites() {
    let recipe = Recipe::new(
        "Out of order",
        vec![
            Step::new(3, "serve").with_requires([2]),
            Step::new(1, "chop"),
            Step::new(2, "fry").with_requires([1]),
        ],
    );
    assert_eq!(recipe.execution_order().expect("valid"), vec![1, 2, 3]);
}

#[test]
fn test_execution_order_prefers_authoring_order() {
    let recipe = Recipe::new(
        "Branches",
        vec![
            Step::new(10, "heat"),
            Step::new(20, "wash"),
            Step::new(30, "add").with_requires([10]),
        ],
    );
    assert_eq!(recipe.execution_order().expect("valid"), vec![10, 20, 30]);
}

#[test]
fn test_validate_rejects_empty_recipe() {
    let recipe = Recipe::new("Empty", vec![]);
    assert!(matches!(recipe.validate(), Err(RecipeError::EmptyRecipe)));
}

#[test]
fn test_validate_rejects_duplicate_ids() {
    let recipe = Recipe::new("Dupes", vec![Step::new(1, "chop"), Step::new(1, "fry")]);
    assert!(matches!(
        recipe.validate(),
        Err(RecipeError::DuplicateStep { id: 1 })
    ));
}

#[test]
fn test_validate_rejects_unknown_prerequisite() {
    let recipe = Recipe::new("Dangling", vec![Step::new(1, "fry").with_requires([7])]);
    assert!(matches!(
        recipe.validate(),
        Err(RecipeError::UnknownPrerequisite { step: 1, requires: 7 })
    ));
}

#[test]
fn test_validate_rejects_cycles() {
    let recipe = Recipe::new(
        "Loop",
        vec![
            Step::new(1, "chop"),
            Step::new(2, "fry").with_requires([1, 3]),
            Step::new(3, "stir").with_requires([2]),
            Step::new(4, "serve").with_requires([3]),
        ],
    );
    match recipe.validate() {
        Err(RecipeError::CyclicPrerequisites { steps }) => assert_eq!(steps, vec![2, 3, 4]),
        other => panic!("expected cycle error, got {other:?}"),
    }
}

#[test]
fn test_validate_rejects_self_requirement() {
    let recipe = Recipe::new("Self", vec![Step::new(1, "chop").with_requires([1])]);
    assert!(matches!(
        recipe.validate(),
        Err(RecipeError::CyclicPrerequisites { .. })
    ));
}

#[test]
fn test_repeated_requirement_counts_once() {
    let recipe = Recipe::new(
        "Repeat",
        vec![Step::new(1, "chop"), Step::new(2, "fry").with_requires([1, 1])],
    );
    assert_eq!(recipe.execution_order().expect("valid"), vec![1, 2]);
}

#[test]
fn test_step_matches() {
    let step = Step::new(1, "chop").with_item("potato");
    assert!(step.matches("chop", None));
    assert!(step.matches("chop", Some("potato")));
    assert!(!step.matches("chop", Some("onion")));
    assert!(!step.matches("fry", Some("potato")));
    assert!(!Step::new(2, "stir").matches("stir", Some("pan")));
}

#[test]
fn test_criteria_and_semantics() {
    let recipe = potato_recipe();
    let fry_potato = StepCriteria::action("fry").with_item("potato");
    let matched: Vec<_> = recipe.steps.iter().filter(|s| fry_potato.matches(s)).collect();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, 2);

    let potato = StepCriteria::item("potato");
    assert_eq!(recipe.steps.iter().filter(|s| potato.matches(s)).count(), 2);

    let none = StepCriteria::item("potato").with_state("fried");
    assert_eq!(recipe.steps.iter().filter(|s| none.matches(s)).count(), 0);

    assert!(StepCriteria::default().is_empty());
    assert!(!potato.is_empty());
}

#[test]
fn test_progress_percentage() {
    let progress = Progress::new(2, 1);
    assert_eq!(progress.percentage, 50.0);
    assert_eq!(progress.remaining(), 1);
    assert!(!progress.is_complete());

    assert!(Progress::new(3, 3).is_complete());
    assert_eq!(Progress::new(0, 0).percentage, 0.0);
}

#[test]
fn test_ingredient_value_serialization() {
    let present = serde_json::to_value(IngredientValue::Present).expect("serialize");
    assert_eq!(present, serde_json::json!(true));

    let selected =
        serde_json::to_value(IngredientValue::Selected("2tsp".to_string())).expect("serialize");
    assert_eq!(selected, serde_json::json!("2tsp"));

    assert_eq!(
        IngredientValue::from_option(Some("pinch")).selection(),
        Some("pinch")
    );
    assert_eq!(IngredientValue::from_option(None), IngredientValue::Present);
}
