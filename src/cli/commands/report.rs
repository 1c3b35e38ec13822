use std::path::PathBuf;

use chrono::Utc;

use crate::{
    cli::{
        core::{CommandError, CommandResult, ShellContext},
        output,
    },
    report::{default_report_name, write_client_report},
};

pub(crate) fn export(context: &ShellContext, args: &[&str]) -> CommandResult {
    let (needle, path_arg) = match args {
        [needle] => (needle, None),
        [needle, path] => (needle, Some(*path)),
        _ => return Err(CommandError::Usage("report <client> [path]".into())),
    };

    let id = context.find_client_id(needle)?;
    let client = context
        .roster
        .client(&id)
        .ok_or_else(|| CommandError::Invalid(format!("No client matches `{needle}`")))?;
    let category = context.roster.resolve_category(&client.category_id);

    let path = match path_arg {
        Some(path) => PathBuf::from(path),
        None => context.storage.base_dir().join(default_report_name(client)),
    };
    write_client_report(client, &category, Utc::now(), &path)?;
    output::success(format!("Report written to {}.", path.display()));
    Ok(())
}
