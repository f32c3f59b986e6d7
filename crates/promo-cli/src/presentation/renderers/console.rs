use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandOutput, Outcome};

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: std::io::stdout().is_terminal(),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandOutput<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            let marker = badge.outcome.marker();
            match (self.color, badge.outcome) {
                (false, _) => println!("{} {}", marker, badge.label),
                (true, Outcome::Done) => println!("{} {}", marker.green(), badge.label.bold()),
                (true, outcome) if outcome.is_problem() => {
                    println!("{} {}", marker.yellow(), badge.label.yellow().bold())
                }
                (true, _) => println!("{} {}", marker, badge.label.dimmed()),
            }
            println!();
        }

        print!("{}", result.content);

        if !result.next_steps.is_empty() {
            println!("\nNext:");
            for step in &result.next_steps {
                match &step.command {
                    Some(cmd) if self.color => println!("  {}: {}", step.description, cmd.cyan()),
                    Some(cmd) => println!("  {}: {}", step.description, cmd),
                    None => println!("  {}", step.description),
                }
            }
        }

        Ok(())
    }
}
