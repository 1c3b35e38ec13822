//! Shell context, command dispatch, and CLI error types.

use std::io;

use chrono::Utc;
use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;

use crate::{
    core::services::ServiceError,
    errors::StoreError,
    storage::JsonStorage,
    subscription::Roster,
};

use super::{commands, output};

/// How the shell sources its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Fatal errors that end the shell itself.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Recoverable errors reported to the user without leaving the shell.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(String),
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type CommandResult = Result<(), CommandError>;

/// Owns the loaded roster and the storage handle for the lifetime of the
/// shell. All command handlers mutate state through this context, and every
/// mutation is persisted before the handler returns.
pub struct ShellContext {
    pub mode: CliMode,
    pub storage: JsonStorage,
    pub roster: Roster,
    pub running: bool,
    theme: ColorfulTheme,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let storage = JsonStorage::new_default()?;
        let roster = storage.load_or_default(Utc::now())?;
        Ok(Self {
            mode,
            storage,
            roster,
            running: true,
            theme: ColorfulTheme::default(),
        })
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        commands::COMMAND_NAMES.to_vec()
    }

    pub fn prompt(&self) -> String {
        "subtrack> ".to_string()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        commands::dispatch(self, command, args)
    }

    /// Persists the roster after a successful mutation.
    pub(crate) fn persist(&mut self) -> CommandResult {
        self.storage.save(&self.roster)?;
        Ok(())
    }

    /// Asks for confirmation before destructive actions. Script mode always
    /// proceeds; scripts are expected to mean what they say.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|err| CommandError::Invalid(format!("prompt failed: {err}")))
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        output::error(&err);
        if let CommandError::Usage(_) = err {
            output::info("Type `help` for the command list.");
        }
        Ok(())
    }

    /// Closest known command for did-you-mean suggestions.
    pub(crate) fn suggest_command(&self, input: &str) -> Option<&'static str> {
        commands::COMMAND_NAMES
            .iter()
            .map(|name| (levenshtein(input, name), *name))
            .filter(|(distance, _)| *distance <= 3)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }

    /// Resolves a client argument that may be an id or a unique
    /// case-insensitive name.
    pub(crate) fn find_client_id(&self, needle: &str) -> Result<String, CommandError> {
        if let Some(client) = self.roster.client(needle) {
            return Ok(client.id.clone());
        }
        let lowered = needle.to_lowercase();
        let mut matches = self
            .roster
            .clients
            .iter()
            .filter(|client| client.name.to_lowercase() == lowered);
        match (matches.next(), matches.next()) {
            (Some(client), None) => Ok(client.id.clone()),
            (Some(_), Some(_)) => Err(CommandError::Invalid(format!(
                "Client name `{needle}` is ambiguous; use the id"
            ))),
            _ => Err(CommandError::Invalid(format!(
                "No client matches `{needle}`"
            ))),
        }
    }

    /// Resolves a category argument the same way.
    pub(crate) fn find_category_id(&self, needle: &str) -> Result<String, CommandError> {
        if let Some(category) = self.roster.category(needle) {
            return Ok(category.id.clone());
        }
        let lowered = needle.to_lowercase();
        let mut matches = self
            .roster
            .categories
            .iter()
            .filter(|category| category.name.to_lowercase() == lowered);
        match (matches.next(), matches.next()) {
            (Some(category), None) => Ok(category.id.clone()),
            (Some(_), Some(_)) => Err(CommandError::Invalid(format!(
                "Category name `{needle}` is ambiguous; use the id"
            ))),
            _ => Err(CommandError::Invalid(format!(
                "No category matches `{needle}`"
            ))),
        }
    }
}
