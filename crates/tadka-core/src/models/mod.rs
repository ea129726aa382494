//! Data models for recipes, steps and session state.
//!
//! Recipes and steps are the static definition loaded once per game; they
//! derive `Deserialize` so they can be read straight from JSON recipe files,
//! and `JsonSchema` under the `schema` feature. [`Progress`],
//! [`IngredientValue`] and [`SessionSnapshot`] are produced by the engine
//! and only ever serialized.
//!
//! Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use tadka_core::models::{Recipe, Step};
//!
//! let recipe = Recipe::new(
//!     "Fried potato",
//!     vec![
//!         Step::new(1, "chop").with_item("potato"),
//!         Step::new(2, "fry").with_item("potato").with_requires([1]),
//!     ],
//! );
//! assert_eq!(recipe.execution_order().unwrap(), vec![1, 2]);
//! ```

pub mod filters;
pub mod ingredient;
pub mod progress;
pub mod recipe;
pub mod snapshot;
pub mod step;

#[cfg(test)]
mod tests;

pub use filters::StepCriteria;
pub use ingredient::IngredientValue;
pub use progress::Progress;
pub use recipe::Recipe;
pub use snapshot::SessionSnapshot;
pub use step::{Step, StepId};
