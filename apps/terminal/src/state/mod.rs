//! # Application State
//!
//! - [`ConfigState`] - settings from the environment, read-only after startup
//! - [`Session`] - one customer's ordering session

mod config;
mod session;

pub use config::ConfigState;
pub use session::Session;
