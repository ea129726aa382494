//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay plain data.

use std::fmt;

use super::{Ingredients, Steps};
use crate::models::{IngredientValue, Progress, Recipe, SessionSnapshot, Step};

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title())?;
        writeln!(f)?;
        writeln!(f, "- Steps: {}", self.steps.len())?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item {
            Some(item) => writeln!(f, "### {}. {} {}", self.id, self.action, item)?,
            None => writeln!(f, "### {}. {}", self.id, self.action)?,
        }
        writeln!(f)?;

        if !self.requires.is_empty() {
            let requires: Vec<String> = self.requires.iter().map(ToString::to_string).collect();
            writeln!(f, "- Requires: {}", requires.join(", "))?;
        }
        if let Some(state) = &self.state {
            writeln!(f, "- Sets state: {state}")?;
        }
        if self.has_options() {
            writeln!(f, "- Options: {}", self.options.join(", "))?;
        }
        if !self.requires.is_empty() || self.state.is_some() || self.has_options() {
            writeln!(f)?;
        }

        if !self.hints.is_empty() {
            writeln!(f, "#### Hints")?;
            writeln!(f)?;
            for hint in &self.hints {
                writeln!(f, "- {hint}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} steps ({:.0}%)",
            self.completed, self.total, self.percentage
        )
    }
}

impl fmt::Display for IngredientValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientValue::Present => write!(f, "added"),
            IngredientValue::Selected(option) => write!(f, "{option}"),
        }
    }
}

impl fmt::Display for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.recipe)?;
        writeln!(f)?;
        writeln!(f, "- Progress: {}", self.progress)?;
        writeln!(f, "- State: {}", self.state.as_deref().unwrap_or("not started"))?;

        writeln!(f, "\n## Next steps")?;
        writeln!(f)?;
        if self.progress.is_complete() {
            writeln!(f, "Recipe complete.")?;
        } else {
            write!(f, "{}", Steps(self.next_steps.iter().collect()))?;
        }

        writeln!(f, "\n## Ingredients")?;
        writeln!(f)?;
        write!(f, "{}", Ingredients(&self.ingredients))
    }
}
