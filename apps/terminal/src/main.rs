//! # Pizza Builder Terminal Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match pizza_terminal_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pizza-terminal: {}", err);
            ExitCode::FAILURE
        }
    }
}
