//! Interactive play session.
//!
//! Reads one command per line and answers with markdown, standing in for the
//! game scene: every action goes through the same engine calls the scene
//! makes after a player gesture.

use std::io::BufRead;

use anyhow::{Context, Result};
use log::debug;
use tadka_core::{
    params::{CompleteStep, PerformAction},
    Ingredients, OperationStatus, RecipeEngine, StepId, Steps,
};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
## Commands

- `next` show the steps that can be done now
- `hints` show hints for the current step
- `options <action> <item>` show the options for an action
- `do <action> [item] [option]` perform an action; quote names with
  spaces, as in `do add \"red chili powder\" 1tsp`
- `complete <id> [option]` complete a step by ID
- `progress`, `state`, `ingredients`, `status` show the session
- `reset` start over
- `quit` leave the kitchen
";

/// Outcome of one input line.
#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub quit: bool,
}

impl Reply {
    fn show(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

/// A play session over one engine.
pub struct Session {
    engine: RecipeEngine,
}

impl Session {
    pub fn new(engine: RecipeEngine) -> Self {
        Self { engine }
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R, renderer: &TerminalRenderer) -> Result<()> {
        renderer.render(&format!(
            "# {}\n\nType `help` for commands.\n\n",
            self.engine.recipe().title()
        ))?;
        renderer.render(&Steps(self.engine.next_steps()).to_string())?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            let reply = self.execute(&line);
            renderer.render(&reply.output)?;
            if reply.quit {
                break;
            }
        }
        Ok(())
    }

    /// Handle one command line.
    pub fn execute(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        debug!("session command '{command}' args '{rest}'");

        match command {
            "" => Reply::show(""),
            "next" | "n" => Reply::show(Steps(self.engine.next_steps()).to_string()),
            "hints" | "h" => Reply::show(self.hints()),
            "options" | "o" => Reply::show(self.options(rest)),
            "do" | "d" => Reply::show(self.perform(rest)),
            "complete" | "c" => Reply::show(self.complete(rest)),
            "progress" | "p" => Reply::show(format!("Progress: {}\n", self.engine.progress())),
            "state" => Reply::show(format!(
                "State: {}\n",
                self.engine.state().unwrap_or("not started")
            )),
            "ingredients" | "i" => Reply::show(Ingredients(self.engine.ingredients()).to_string()),
            "status" => Reply::show(self.engine.snapshot().to_string()),
            "reset" => {
                self.engine.reset();
                Reply::show(OperationStatus::success("Session reset").to_string())
            }
            "help" | "?" => Reply::show(HELP),
            "quit" | "exit" | "q" => Reply {
                output: String::new(),
                quit: true,
            },
            other => Reply::show(
                OperationStatus::failure(format!("Unknown command '{other}'. Type 'help'."))
                    .to_string(),
            ),
        }
    }

    fn hints(&self) -> String {
        let hints = self.engine.hints();
        if hints.is_empty() {
            return "No hints.\n".to_string();
        }
        hints.iter().map(|hint| format!("- {hint}\n")).collect()
    }

    fn options(&self, rest: &str) -> String {
        let (action, item) = match rest.parse::<PerformAction>() {
            Ok(PerformAction {
                action,
                item: Some(item),
                ..
            }) => (action, item),
            Ok(_) => {
                return OperationStatus::failure("Usage: options <action> <item>").to_string();
            }
            Err(e) => return OperationStatus::failure(e.to_string()).to_string(),
        };
        let options = self.engine.options_for_action(&action, &item);
        if options.is_empty() {
            format!("No options for {action} {item}.\n")
        } else {
            format!("Options: {}\n", options.join(", "))
        }
    }

    fn complete(&mut self, rest: &str) -> String {
        let completed = rest
            .parse::<CompleteStep>()
            .and_then(|params| self.engine.complete(&params).map(|()| params.id));
        self.report(completed)
    }

    fn perform(&mut self, rest: &str) -> String {
        let completed = rest
            .parse::<PerformAction>()
            .and_then(|params| self.engine.perform(&params).map(|step| step.id));
        self.report(completed)
    }

    fn report(&self, completed: tadka_core::Result<StepId>) -> String {
        match completed {
            Ok(id) => OperationStatus::step_completed(&self.engine, id),
            Err(e) => OperationStatus::failure(e.to_string()),
        }
        .to_string()
    }
}
