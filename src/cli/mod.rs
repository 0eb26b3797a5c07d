//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers return
//! JSON data or an `EditError`; `response` turns either into printed output.

pub mod config;
pub mod encode;
pub mod history;
pub mod response;
pub mod send;
pub mod vault;

pub use config::config_summary;
pub use encode::encode_input;
pub use history::history_lines;
pub use response::{OutputFormat, Response};
pub use send::{handle_send_command, SendCommands};
pub use vault::{handle_init, unlock_vault};
