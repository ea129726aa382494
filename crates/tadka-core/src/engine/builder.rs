//! Builder for creating and configuring RecipeEngine instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::RecipeEngine;
use crate::{
    error::{RecipeError, Result},
    models::Recipe,
};

/// XDG prefix under which recipe files are looked up.
const XDG_PREFIX: &str = "tadka";

/// Directory below the XDG data directories holding `<name>.json` recipes.
const RECIPE_SUBDIR: &str = "recipes";

/// Builder for creating and configuring RecipeEngine instances.
///
/// The recipe comes from, in order of precedence: an in-memory value, an
/// explicit file path, or a name looked up in the recipe directory.
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    recipe: Option<Recipe>,
    recipe_path: Option<PathBuf>,
    recipe_name: Option<String>,
    recipe_dir: Option<PathBuf>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an already loaded recipe.
    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipe = Some(recipe);
        self
    }

    /// Loads the recipe from a JSON file.
    pub fn with_recipe_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.recipe_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Looks the recipe up by name in the recipe directory.
    pub fn with_recipe_name(mut self, name: impl Into<String>) -> Self {
        self.recipe_name = Some(name.into());
        self
    }

    /// Sets the directory named recipes are looked up in.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tadka/recipes` and then each of `$XDG_DATA_DIRS`.
    pub fn with_recipe_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.recipe_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Loads, validates and wraps the configured recipe in a new engine.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Configuration` if no recipe source was set
    /// Returns `RecipeError::RecipeNotFound` if a named recipe does not exist
    /// Returns `RecipeError::FileSystem` or `RecipeError::Serialization` if the
    /// file cannot be read or parsed
    /// Returns a validation error if the recipe cannot be played to the end
    pub fn build(self) -> Result<RecipeEngine> {
        let recipe = self.load_recipe()?;
        RecipeEngine::new(recipe)
    }

    /// Loads the configured recipe without validating it.
    pub fn load_recipe(self) -> Result<Recipe> {
        if let Some(recipe) = self.recipe {
            return Ok(recipe);
        }
        if let Some(path) = &self.recipe_path {
            return Recipe::from_path(path);
        }
        if let Some(name) = &self.recipe_name {
            let path = self.resolve_named(name)?;
            return Recipe::from_path(path);
        }
        Err(RecipeError::Configuration {
            message: "no recipe, recipe path or recipe name configured".to_string(),
        })
    }

    fn resolve_named(&self, name: &str) -> Result<PathBuf> {
        let file_name = format!("{name}.json");
        let found = match &self.recipe_dir {
            Some(dir) => Some(dir.join(&file_name)).filter(|path| path.is_file()),
            None => xdg::BaseDirectories::with_prefix(XDG_PREFIX)
                .find_data_file(Path::new(RECIPE_SUBDIR).join(&file_name)),
        };
        debug!("Resolved recipe '{name}' to {found:?}");
        found.ok_or_else(|| RecipeError::RecipeNotFound {
            name: name.to_string(),
            dir: self.recipe_dir.clone().unwrap_or_else(default_recipe_dir_display),
        })
    }
}

fn default_recipe_dir_display() -> PathBuf {
    Path::new("$XDG_DATA_HOME")
        .join(XDG_PREFIX)
        .join(RECIPE_SUBDIR)
}

/// Names of the recipes available in `dir`, or in the XDG recipe
/// directories when `dir` is `None`. Sorted and without duplicates.
///
/// # Errors
///
/// Returns `RecipeError::FileSystem` if `dir` cannot be read.
pub fn available_recipes(dir: Option<&Path>) -> Result<Vec<String>> {
    let paths: Vec<PathBuf> = match dir {
        Some(dir) => std::fs::read_dir(dir)
            .map_err(|e| RecipeError::FileSystem {
                path: dir.to_path_buf(),
                source: e,
            })?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .collect(),
        None => xdg::BaseDirectories::with_prefix(XDG_PREFIX).list_data_files(RECIPE_SUBDIR),
    };

    let mut names: Vec<String> = paths
        .iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .collect();
    names.sort();
    names.dedup();
    Ok(names)
}
