//! # Pizza Terminal Library
//!
//! The terminal front end for Pizza Builder.
//!
//! ## Module Organization
//! ```text
//! pizza_terminal_lib/
//! ├── lib.rs          ◄─── You are here (startup & input loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── session.rs  ◄─── One ordering session
//! ├── catalog.rs      ◄─── JSON catalog loader
//! ├── commands.rs     ◄─── Input parsing and dispatch
//! ├── render.rs       ◄─── Text rendering
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod catalog;
pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::error::Error;
use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{execute, Command, Outcome};
use state::{ConfigState, Session};

/// Runs the terminal application until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// 1. Initialize logging (stderr, RUST_LOG aware)
/// 2. Read configuration from PIZZA_* variables
/// 3. Load the catalog and start a session
/// 4. Read commands line by line, redraw after each
/// ```
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(catalog_dir = %config.catalog_dir.display(), "Starting Pizza Builder");

    let mut session = Session::start(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    draw(&mut stdout, &session)?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(&mut stdout)?;
            continue;
        }

        match line.parse::<Command>().and_then(|command| execute(&mut session, command)) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Help) => writeln!(stdout, "{}", render::HELP)?,
            Ok(Outcome::Completed(order)) => {
                let mut text = String::new();
                render::render_completed(&mut text, session.config(), &order)?;
                write!(stdout, "{}", text)?;
                draw(&mut stdout, &session)?;
            }
            Ok(Outcome::Updated) => draw(&mut stdout, &session)?,
            Err(err) => {
                warn!(code = ?err.code, message = %err.message, "Command failed");
                writeln!(stdout, "error: {}", err)?;
            }
        }
        prompt(&mut stdout)?;
    }

    info!("Goodbye");
    Ok(())
}

fn draw(stdout: &mut impl Write, session: &Session) -> Result<(), Box<dyn Error>> {
    let mut text = String::new();
    render::render_view(&mut text, session.config(), session.configurator())?;
    writeln!(stdout)?;
    write!(stdout, "{}", text)?;
    Ok(())
}

fn prompt(stdout: &mut impl Write) -> io::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the rendered wizard.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every transition
/// - `RUST_LOG=pizza_core=trace` - Trace the core only
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
