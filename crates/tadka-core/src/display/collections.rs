//! Collection wrapper types for displaying groups of domain objects.

use std::{collections::BTreeMap, fmt};

use crate::models::{IngredientValue, Step};

/// Newtype wrapper for displaying a list of steps, such as the eligible
/// steps of a session.
///
/// Handles empty collections gracefully.
pub struct Steps<'a>(pub Vec<&'a Step>);

impl<'a> Steps<'a> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Step> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Steps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No steps available.")
        } else {
            for step in &self.0 {
                write!(f, "{step}")?;
            }
            Ok(())
        }
    }
}

/// Wrapper for displaying the ingredients recorded in a session.
pub struct Ingredients<'a>(pub &'a BTreeMap<String, IngredientValue>);

impl fmt::Display for Ingredients<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No ingredients used yet.");
        }
        for (item, value) in self.0 {
            writeln!(f, "- **{item}**: {value}")?;
        }
        Ok(())
    }
}
