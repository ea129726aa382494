//! Parameter structures for engine operations.
//!
//! These structures carry player input from any front end (the CLI session,
//! a scene layer, a test script) to the engine without tying the engine to
//! an input framework. Front ends convert their own argument types into
//! these with `From` impls, or parse them from text with [`FromStr`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CLI / session  │    │  Core Params    │    │  RecipeEngine   │
//! │  (clap, stdin)  │───▶│ (serde derives) │───▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::RecipeError, models::StepId};

/// Parameters for completing a step by ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CompleteStep {
    /// ID of the step to complete
    pub id: StepId,
    /// Option chosen for the step, if it offers any
    #[serde(default)]
    pub option: Option<String>,
}

impl FromStr for CompleteStep {
    type Err = RecipeError;

    /// Parse `"<id> [option]"`. A quoted option may contain spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words = split_words(s)?;
        let (id, option) = match words.as_slice() {
            [] => {
                return Err(RecipeError::invalid_input("id").with_reason("missing step ID"));
            }
            [id] => (id, None),
            [id, option] => (id, Some(option.clone())),
            [_, _, extra, ..] => {
                return Err(RecipeError::invalid_input("option")
                    .with_reason(format!("unexpected trailing input '{extra}'")));
            }
        };
        let id = id.parse::<StepId>().map_err(|e| {
            RecipeError::invalid_input("id").with_reason(format!("'{id}' is not a step ID: {e}"))
        })?;
        Ok(Self { id, option })
    }
}

/// Parameters for performing an action the way a player would.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PerformAction {
    /// Action verb, e.g. "chop"
    pub action: String,
    /// Item acted on, e.g. "potato"
    #[serde(default)]
    pub item: Option<String>,
    /// Option chosen, e.g. "2tsp"
    #[serde(default)]
    pub option: Option<String>,
}

impl FromStr for PerformAction {
    type Err = RecipeError;

    /// Parse `"<action> [item] [option]"`. Quote an item or option that
    /// contains spaces: `add "red chili powder" 1tsp`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = split_words(s)?.into_iter();
        let action = words
            .next()
            .ok_or_else(|| RecipeError::invalid_input("action").with_reason("missing action"))?;
        let item = words.next();
        let option = words.next();
        if let Some(extra) = words.next() {
            return Err(RecipeError::invalid_input("option")
                .with_reason(format!("unexpected trailing input '{extra}'")));
        }
        Ok(Self {
            action,
            item,
            option,
        })
    }
}

/// Splits a command line on whitespace, keeping single- or double-quoted
/// runs together.
fn split_words(s: &str) -> Result<Vec<String>, RecipeError> {
    let mut words = Vec::new();
    let mut word: Option<String> = None;
    let mut quote: Option<char> = None;

    for c in s.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => word.get_or_insert_with(String::new).push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                if word.is_none() {
                    word = Some(String::new());
                }
            }
            None if c.is_whitespace() => words.extend(word.take()),
            None => word.get_or_insert_with(String::new).push(c),
        }
    }

    if let Some(q) = quote {
        return Err(RecipeError::invalid_input("input")
            .with_reason(format!("unterminated {q} quote")));
    }
    words.extend(word);
    Ok(words)
}
