use chrono::Utc;

use crate::{
    cli::{
        core::{CommandError, CommandResult, ShellContext},
        output,
        ui::{Table, TableColumn},
    },
    core::services::CategoryService,
    subscription::Category,
};

const DEFAULT_COLOR: &str = "#3B82F6";

pub(crate) fn list(context: &ShellContext) -> CommandResult {
    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Name"),
        TableColumn::left("Color"),
        TableColumn::right("Clients"),
    ]);
    for category in CategoryService::list(&context.roster) {
        let count = context
            .roster
            .clients
            .iter()
            .filter(|client| client.category_id == category.id)
            .count();
        table.add_row(vec![
            category.id.clone(),
            category.name.clone(),
            category.color.clone(),
            count.to_string(),
        ]);
    }
    output::plain(table.render());
    Ok(())
}

pub(crate) fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, color) = match args {
        [name] => (name, DEFAULT_COLOR),
        [name, color] => (name, *color),
        _ => return Err(CommandError::Usage("add-category <name> [color]".into())),
    };
    let category = Category::new(*name, color, Utc::now());
    let id = CategoryService::add(&mut context.roster, category)?;
    context.persist()?;
    output::success(format!("Added category `{name}` ({id})."));
    Ok(())
}

pub(crate) fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [needle] = args else {
        return Err(CommandError::Usage("remove-category <category>".into()));
    };
    let id = context.find_category_id(needle)?;
    let name = context
        .roster
        .category(&id)
        .map(|category| category.name.clone())
        .unwrap_or_else(|| id.clone());
    let referencing = context
        .roster
        .clients
        .iter()
        .filter(|client| client.category_id == id)
        .count();
    let prompt = if referencing > 0 {
        format!("Remove category `{name}`? {referencing} client(s) will fall back to Unknown.")
    } else {
        format!("Remove category `{name}`?")
    };
    if !context.confirm(&prompt)? {
        output::info("Removal cancelled.");
        return Ok(());
    }
    CategoryService::remove(&mut context.roster, &id)?;
    context.persist()?;
    output::success(format!("Removed category `{name}`."));
    Ok(())
}
