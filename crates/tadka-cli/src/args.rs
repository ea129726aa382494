//! Command-line interface definitions using clap
//!
//! Argument structures here carry clap derives and help text; anything the
//! engine consumes is converted into `tadka_core::params` types so the core
//! stays free of CLI concerns.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use tadka_core::params::CompleteStep;

/// Play and inspect tadka recipes from the terminal
///
/// Tadka drives the recipe progression engine the way the game scene does:
/// it loads a recipe, replays or performs actions, and shows which steps are
/// available, which hints apply and how far the dish has come.
#[derive(Parser)]
#[command(version, about, name = "tadka")]
pub struct Args {
    /// Directory holding `<name>.json` recipes. Defaults to
    /// $XDG_DATA_HOME/tadka/recipes
    #[arg(long, global = true)]
    pub recipe_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the tadka CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show a recipe and all of its steps
    #[command(alias = "s")]
    Show(RecipeArgs),
    /// Validate a recipe and print the order its steps can be cooked in
    Check(RecipeArgs),
    /// Show what can be done next after some steps are completed
    #[command(alias = "n")]
    Next(NextArgs),
    /// Play a recipe interactively, reading commands from stdin
    #[command(alias = "p")]
    Play(RecipeArgs),
    /// List recipes in the recipe directory
    #[command(aliases = ["l", "ls"])]
    List,
    /// Check whether an ingredient name satisfies an expected one
    #[command(alias = "m")]
    Match(MatchArgs),
    /// Print the JSON schema of the recipe file format
    Schema,
}

/// Selects a recipe
#[derive(ClapArgs)]
pub struct RecipeArgs {
    /// Recipe file path, or the name of a recipe in the recipe directory
    #[arg(help = "Recipe file path, or the name of a recipe in the recipe directory")]
    pub recipe: String,
}

/// Replay completed steps and show the session that results
///
/// Completed steps are given as step IDs, optionally with the chosen option
/// after a colon: `--done 1,3:2tsp,2`. They are applied in order.
#[derive(ClapArgs)]
pub struct NextArgs {
    /// Recipe file path, or the name of a recipe in the recipe directory
    pub recipe: String,
    /// Completed steps as comma-separated `id[:option]` entries
    #[arg(
        short,
        long,
        value_delimiter = ',',
        value_parser = parse_completed_step,
        help = "Completed steps as comma-separated id[:option] entries"
    )]
    pub done: Vec<CompleteStep>,
    /// Print the session as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Compare two ingredient names
#[derive(ClapArgs)]
pub struct MatchArgs {
    /// Ingredient name the player used
    pub actual: String,
    /// Ingredient name the recipe expects; omitted means anything goes
    pub expected: Option<String>,
}

fn parse_completed_step(value: &str) -> Result<CompleteStep, String> {
    value
        .replacen(':', " ", 1)
        .parse::<CompleteStep>()
        .map_err(|e| e.to_string())
}
