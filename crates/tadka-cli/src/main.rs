//! Tadka CLI Application
//!
//! Command-line driver for the tadka recipe progression engine.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        recipe_dir,
        no_color,
        command,
    } = Args::parse();

    let cli = Cli::new(recipe_dir, TerminalRenderer::new(!no_color));

    info!("Tadka started");

    match command {
        Some(Show(args)) => cli.show(args),
        Some(Check(args)) => cli.check(args),
        Some(Next(args)) => cli.next(args),
        Some(Play(args)) => cli.play(args),
        Some(Match(args)) => cli.match_ingredient(args),
        Some(Schema) => cli.schema(),
        Some(List) | None => cli.list(),
    }
}
