//! Recorded ingredient values.

use serde::{Serialize, Serializer};

/// What the engine recorded for an ingredient touched by a completed step.
///
/// Serializes as the selected option string, or `true` when no option was
/// chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientValue {
    /// The ingredient was used without choosing a variant
    Present,
    /// The ingredient was used with the given option, e.g. "2tsp"
    Selected(String),
}

impl IngredientValue {
    /// Value recorded for a completed step given the player's option.
    pub fn from_option(option: Option<&str>) -> Self {
        match option {
            Some(option) => IngredientValue::Selected(option.to_string()),
            None => IngredientValue::Present,
        }
    }

    /// The selected option, if any.
    pub fn selection(&self) -> Option<&str> {
        match self {
            IngredientValue::Present => None,
            IngredientValue::Selected(option) => Some(option),
        }
    }
}

impl Serialize for IngredientValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IngredientValue::Present => serializer.serialize_bool(true),
            IngredientValue::Selected(option) => serializer.serialize_str(option),
        }
    }
}
