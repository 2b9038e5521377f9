//! Presentation boundary
//!
//! Runs one operator command against the [`Inspector`] and always yields a
//! report: errors propagated by the core are rendered as a single line.

use tracing::error;

use crate::core::{Command, HELP};
use crate::domain::{Report, Result};
use crate::modules::Inspector;

/// What the caller should do after rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(Report),
    Quit,
}

pub struct App {
    inspector: Inspector,
}

impl App {
    pub fn new(inspector: Inspector) -> Self {
        Self { inspector }
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    pub async fn execute(&self, command: Command) -> Outcome {
        let result: Result<Report> = match command {
            Command::Connect => self.inspector.connect().await,
            Command::Toggle => Ok(self.inspector.toggle()),
            Command::Snapshot => self.inspector.snapshot().await,
            Command::Probe(target) => self.inspector.probe_address(&target).await,
            Command::Erc20 { token, holder } => self.inspector.probe_erc20(&token, &holder).await,
            Command::Status => Ok(self.inspector.ready()),
            Command::Help => Ok(help()),
            Command::Empty => return Outcome::Render(Report::new("")),
            Command::Unknown(input) => Ok(Report::new(format!(
                "Unknown command: {} (try `help`)",
                input
            ))),
            Command::Quit => return Outcome::Quit,
        };

        Outcome::Render(result.unwrap_or_else(|err| {
            error!(kind = err.kind().label(), "{}", err);
            Report::failure(&err)
        }))
    }
}

fn help() -> Report {
    HELP[1..]
        .iter()
        .fold(Report::new(HELP[0]), |report, line| report.line(*line))
}
