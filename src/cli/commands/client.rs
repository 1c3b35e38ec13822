use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use colored::Colorize;

use crate::{
    cli::{
        core::{CommandError, CommandResult, ShellContext},
        output,
        ui::{Table, TableColumn},
    },
    core::services::ClientService,
    report::{format_amount, format_date, status_line},
    subscription::{
        classify, days_until_expiry, display_order, total_paid, Client, Duration,
        SubscriptionStatus,
    },
};

pub(crate) fn list(context: &ShellContext, args: &[&str]) -> CommandResult {
    let sort_by = match args.first() {
        None | Some(&"expiry") => SortBy::Expiry,
        Some(&"name") => SortBy::Name,
        Some(other) => {
            return Err(CommandError::Usage(format!(
                "list [name|expiry] (got `{other}`)"
            )))
        }
    };

    let now = Utc::now();
    let mut clients: Vec<&Client> = context.roster.clients.iter().collect();
    match sort_by {
        SortBy::Name => clients.sort_by_key(|client| client.name.to_lowercase()),
        SortBy::Expiry => clients.sort_by_key(|client| client.expiry_date()),
    }

    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Name"),
        TableColumn::left("Category"),
        TableColumn::left("Duration"),
        TableColumn::left("Expiry"),
        TableColumn::left("Status"),
    ]);
    for client in clients {
        let expiry = client.expiry_date();
        let status = classify(expiry, now);
        let days = days_until_expiry(expiry, now);
        table.add_row(vec![
            client.id.clone(),
            client.name.clone(),
            context.roster.resolve_category(&client.category_id).name,
            client.duration.label().to_string(),
            format_date(expiry),
            badge_text(status, days),
        ]);
    }
    output::plain(table.render());
    Ok(())
}

pub(crate) fn show(context: &ShellContext, args: &[&str]) -> CommandResult {
    let [needle] = args else {
        return Err(CommandError::Usage("show <client>".into()));
    };
    let id = context.find_client_id(needle)?;
    let client = context
        .roster
        .client(&id)
        .ok_or_else(|| CommandError::Invalid(format!("No client matches `{needle}`")))?;

    let now = Utc::now();
    let expiry = client.expiry_date();
    let status = classify(expiry, now);
    let days = days_until_expiry(expiry, now);
    let category = context.roster.resolve_category(&client.category_id);

    output::section(&client.name);
    output::plain(format!("Id:        {}", client.id));
    output::plain(format!("Category:  {}", category.name));
    if let Some(email) = &client.email {
        output::plain(format!("Email:     {email}"));
    }
    if let Some(phone) = &client.phone {
        output::plain(format!("Phone:     {phone}"));
    }
    output::plain(format!("Duration:  {}", client.duration.label()));
    output::plain(format!("Start:     {}", format_date(client.start_date)));
    output::plain(format!("Expiry:    {}", format_date(expiry)));
    output::plain(format!(
        "Status:    {}",
        styled_status(status, &status_line(status, days))
    ));

    let ordered = display_order(&client.payments);
    if ordered.is_empty() {
        output::info("No payments recorded.");
    } else {
        let mut table = Table::new(vec![
            TableColumn::right("#"),
            TableColumn::left("Date"),
            TableColumn::right("Amount"),
            TableColumn::left("Notes"),
        ]);
        for (idx, payment) in ordered.iter().enumerate() {
            table.add_row(vec![
                (idx + 1).to_string(),
                format_date(payment.date),
                format_amount(payment.amount),
                payment.notes.clone().unwrap_or_else(|| "-".into()),
            ]);
        }
        output::plain(table.render());
    }
    output::plain(format!(
        "Total paid: {}",
        format_amount(total_paid(&client.payments))
    ));
    Ok(())
}

pub(crate) fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, category_arg, term, rest) = match args {
        [name, category, term, rest @ ..] if rest.len() <= 2 => (name, category, term, rest),
        _ => {
            return Err(CommandError::Usage(
                "add-client <name> <category> <week|month|year> [email] [phone]".into(),
            ))
        }
    };
    let duration = Duration::parse(term).ok_or_else(|| {
        CommandError::Invalid(format!("`{term}` is not a term (week, month, or year)"))
    })?;
    let category_id = context.find_category_id(category_arg)?;

    let now = Utc::now();
    let client = Client::new(*name, category_id, duration, now, now).with_contact(
        rest.first().map(|value| value.to_string()),
        rest.get(1).map(|value| value.to_string()),
    );
    let expiry = client.expiry_date();
    let id = ClientService::add(&mut context.roster, client)?;
    context.persist()?;
    output::success(format!(
        "Added client `{name}` ({id}); expires {}.",
        format_date(expiry)
    ));
    Ok(())
}

pub(crate) fn set_expiry(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [needle, date_arg] = args else {
        return Err(CommandError::Usage("set-expiry <client> <YYYY-MM-DD>".into()));
    };
    let date = NaiveDate::parse_from_str(date_arg, "%Y-%m-%d")
        .map_err(|err| CommandError::Invalid(format!("invalid date `{date_arg}`: {err}")))?;
    let expiry = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));

    let id = context.find_client_id(needle)?;
    ClientService::set_expiry(&mut context.roster, &id, expiry)?;
    context.persist()?;

    // Report the expiry actually derived back from the stored start date;
    // month-length clamping can make it differ from the requested day.
    if let Some(client) = context.roster.client(&id) {
        output::success(format!(
            "Start date re-derived; `{}` now expires {}.",
            client.name,
            format_date(client.expiry_date())
        ));
    }
    Ok(())
}

pub(crate) fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [needle] = args else {
        return Err(CommandError::Usage("remove-client <client>".into()));
    };
    let id = context.find_client_id(needle)?;
    let name = context
        .roster
        .client(&id)
        .map(|client| client.name.clone())
        .unwrap_or_else(|| id.clone());
    if !context.confirm(&format!("Remove client `{name}`?"))? {
        output::info("Removal cancelled.");
        return Ok(());
    }
    ClientService::remove(&mut context.roster, &id)?;
    context.persist()?;
    output::success(format!("Removed client `{name}`."));
    Ok(())
}

#[derive(Clone, Copy)]
enum SortBy {
    Name,
    Expiry,
}

/// Compact status text for the roster table.
fn badge_text(status: SubscriptionStatus, days: i64) -> String {
    match status {
        SubscriptionStatus::ExpiringSoon => {
            format!("{days} day{} left", if days == 1 { "" } else { "s" })
        }
        other => other.label().to_string(),
    }
}

/// Colors the status line the way the badge colors read: green, yellow, red.
fn styled_status(status: SubscriptionStatus, line: &str) -> String {
    match status {
        SubscriptionStatus::Active => line.bright_green().to_string(),
        SubscriptionStatus::ExpiringSoon => line.bright_yellow().to_string(),
        SubscriptionStatus::Expired => line.bright_red().to_string(),
    }
}
