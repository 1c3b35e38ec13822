//! Interactive shell and script-mode front end over the subscription core.

pub mod commands;
pub mod core;
pub mod output;
pub mod shell;
pub mod ui;

pub use self::core::{CliError, CliMode, ShellContext};
pub use shell::run_cli;
