//! # Commands
//!
//! Line commands typed at the prompt, and their dispatch onto the session.
//!
//! ## Command Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input              Command              Configurator Operation         │
//! │  ─────              ───────              ──────────────────────         │
//! │  size <id>    ────► SelectSize ────────► select_size(id)                │
//! │  crust <id>   ────► SelectCrust ───────► select_crust(id)               │
//! │  topping <id> ────► ToggleTopping ─────► toggle_topping(id)             │
//! │  next         ────► Next ──────────────► advance()                      │
//! │  back         ────► Back ──────────────► retreat()                      │
//! │  dismiss      ────► Dismiss ───────────► dismiss_error()                │
//! │  reload       ────► Reload ────────────► refresh_catalog(files)         │
//! │  show / help / quit                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use pizza_core::{Advance, CompletedOrder};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::Session;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectSize(String),
    SelectCrust(String),
    ToggleTopping(String),
    Next,
    Back,
    Dismiss,
    Reload,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .ok_or_else(|| ApiError::invalid_command("Empty command. Type 'help' for a list."))?
            .to_lowercase();
        let argument = words.next().map(str::to_string);

        if words.next().is_some() {
            return Err(ApiError::invalid_command(format!(
                "Too many arguments for '{}'",
                verb
            )));
        }

        let needs_id = |argument: Option<String>| {
            argument.ok_or_else(|| ApiError::invalid_command(format!("Usage: {} <id>", verb)))
        };

        match verb.as_str() {
            "size" => Ok(Command::SelectSize(needs_id(argument)?)),
            "crust" => Ok(Command::SelectCrust(needs_id(argument)?)),
            "topping" | "toggle" => Ok(Command::ToggleTopping(needs_id(argument)?)),
            "next" | "finish" | "restart" => Ok(Command::Next),
            "back" => Ok(Command::Back),
            "dismiss" | "ok" => Ok(Command::Dismiss),
            "reload" => Ok(Command::Reload),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ApiError::invalid_command(format!(
                "Unknown command '{}'. Type 'help' for a list.",
                other
            ))),
        }
    }
}

/// What the front end should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State may have changed; redraw.
    Updated,
    /// The customer confirmed a pizza; print it, then redraw.
    Completed(CompletedOrder),
    Help,
    Quit,
}

/// Runs one command against the session.
pub fn execute(session: &mut Session, command: Command) -> ApiResult<Outcome> {
    debug!(?command, "Executing command");

    match command {
        Command::SelectSize(id) => session.configurator_mut().select_size(&id)?,
        Command::SelectCrust(id) => session.configurator_mut().select_crust(&id)?,
        Command::ToggleTopping(id) => {
            session.configurator_mut().toggle_topping(&id)?;
        }
        Command::Next => {
            if let Advance::Completed(order) = session.configurator_mut().advance() {
                return Ok(Outcome::Completed(order));
            }
        }
        Command::Back => {
            session.configurator_mut().retreat();
        }
        Command::Dismiss => session.configurator_mut().dismiss_error(),
        Command::Reload => session.reload_catalog()?,
        Command::Show => {}
        Command::Help => return Ok(Outcome::Help),
        Command::Quit => return Ok(Outcome::Quit),
    }

    Ok(Outcome::Updated)
}
