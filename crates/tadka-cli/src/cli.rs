//! Command handlers for the tadka CLI.

use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{debug, info};
use tadka_core::{
    available_recipes, validate_ingredient, EngineBuilder, OperationStatus, Recipe, RecipeEngine,
};

use crate::{
    args::{MatchArgs, NextArgs, RecipeArgs},
    renderer::TerminalRenderer,
    session::Session,
};

/// Runs CLI commands against recipes from the configured directory.
pub struct Cli {
    recipe_dir: Option<PathBuf>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(recipe_dir: Option<PathBuf>, renderer: TerminalRenderer) -> Self {
        Self {
            recipe_dir,
            renderer,
        }
    }

    /// Builder for a recipe given as a file path or, failing that, a name.
    fn builder_for(&self, recipe: &str) -> EngineBuilder {
        let builder = EngineBuilder::new().with_recipe_dir(self.recipe_dir.as_ref());
        let path = Path::new(recipe);
        if path.is_file() {
            debug!("Loading recipe from file {}", path.display());
            builder.with_recipe_path(Some(path))
        } else {
            debug!("Looking up recipe named '{recipe}'");
            builder.with_recipe_name(recipe)
        }
    }

    fn load_engine(&self, recipe: &str) -> Result<RecipeEngine> {
        self.builder_for(recipe)
            .build()
            .with_context(|| format!("Failed to load recipe '{recipe}'"))
    }

    pub fn show(&self, args: RecipeArgs) -> Result<()> {
        let engine = self.load_engine(&args.recipe)?;
        self.renderer.render(&engine.recipe().to_string())
    }

    pub fn check(&self, args: RecipeArgs) -> Result<()> {
        let recipe: Recipe = self
            .builder_for(&args.recipe)
            .load_recipe()
            .with_context(|| format!("Failed to load recipe '{}'", args.recipe))?;
        let order = recipe
            .execution_order()
            .with_context(|| format!("Recipe '{}' is invalid", recipe.title()))?;

        let order: Vec<String> = order.iter().map(ToString::to_string).collect();
        let status = OperationStatus::success(format!(
            "Recipe '{}' is valid ({} steps)",
            recipe.title(),
            recipe.len()
        ));
        self.renderer
            .render(&format!("{status}\nCooking order: {}\n", order.join(" -> ")))
    }

    pub fn next(&self, args: NextArgs) -> Result<()> {
        let mut engine = self.load_engine(&args.recipe)?;
        for params in &args.done {
            engine
                .complete(params)
                .with_context(|| format!("Failed to replay step {}", params.id))?;
        }

        if args.json {
            let json = serde_json::to_string_pretty(&engine.snapshot())
                .context("Failed to serialize session")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&engine.snapshot().to_string())
        }
    }

    pub fn play(&self, args: RecipeArgs) -> Result<()> {
        let engine = self.load_engine(&args.recipe)?;
        info!("Starting session for recipe '{}'", engine.recipe().title());
        Session::new(engine).run(io::stdin().lock(), &self.renderer)
    }

    pub fn list(&self) -> Result<()> {
        let names = available_recipes(self.recipe_dir.as_deref()).context("Failed to list recipes")?;
        if names.is_empty() {
            return self.renderer.render("No recipes found.\n");
        }
        let mut markdown = String::from("# Recipes\n\n");
        for name in names {
            markdown.push_str(&format!("- {name}\n"));
        }
        self.renderer.render(&markdown)
    }

    pub fn match_ingredient(&self, args: MatchArgs) -> Result<()> {
        let status = match args.expected.as_deref() {
            None => OperationStatus::success(format!("'{}' matches anything expected", args.actual)),
            Some(expected) if validate_ingredient(&args.actual, Some(expected)) => {
                OperationStatus::success(format!("'{}' matches '{expected}'", args.actual))
            }
            Some(expected) => {
                OperationStatus::failure(format!("'{}' does not match '{expected}'", args.actual))
            }
        };
        self.renderer.render(&status.to_string())
    }

    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(Recipe);
        let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
        println!("{json}");
        Ok(())
    }
}
