//! Core library for the tadka cooking game.
//!
//! This crate tracks a player's progress through a recipe: which cooking
//! steps are legal right now, which are done, and which game state the
//! completed steps have led to. It knows nothing about rendering, input or
//! networking; a scene layer polls the engine after each player action and
//! calls [`RecipeEngine::complete_step`] when the action matches a step.
//!
//! # Output
//!
//! Everything a player sees is markdown built from [`std::fmt::Display`]:
//! a [`Recipe`] prints as an overview with one heading per step, a
//! [`SessionSnapshot`] shows progress, state, the steps that are open and
//! the ingredients in the pan, and [`OperationStatus`] reports the result
//! of a player action together with the state it led to. Front ends decide
//! how to render that markdown.
//!
//! # Quick Start
//!
//! ```rust
//! use tadka_core::{EngineBuilder, Recipe};
//!
//! let recipe = Recipe::from_json_str(
//!     r#"{
//!         "name": "Turmeric potatoes",
//!         "steps": [
//!             {"id": 1, "action": "chop", "item": "potato"},
//!             {"id": 2, "action": "add", "item": "turmeric", "requires": [1],
//!              "options": ["1tsp", "2tsp"], "state": "spiced"}
//!         ]
//!     }"#,
//! )?;
//!
//! let mut engine = EngineBuilder::new().with_recipe(recipe).build()?;
//! engine.complete_step(1, None)?;
//! engine.perform_action("add", Some("haldi"), Some("2tsp"))?;
//!
//! assert_eq!(engine.state(), Some("spiced"));
//! assert!(engine.is_finished());
//! println!("{}", engine.snapshot());
//! # Ok::<(), tadka_core::RecipeError>(())
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod ingredients;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use display::{Ingredients, OperationStatus, Steps};
pub use engine::{available_recipes, EngineBuilder, RecipeEngine};
pub use error::{RecipeError, Result};
pub use ingredients::validate_ingredient;
pub use models::{
    IngredientValue, Progress, Recipe, SessionSnapshot, Step, StepCriteria, StepId,
};
pub use params::{CompleteStep, PerformAction};
