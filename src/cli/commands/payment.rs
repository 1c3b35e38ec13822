use chrono::Utc;

use crate::{
    cli::{
        core::{CommandError, CommandResult, ShellContext},
        output,
        ui::{Table, TableColumn},
    },
    core::services::PaymentService,
    report::{format_amount, format_date},
    subscription::{display_order, total_paid},
};

pub(crate) fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [needle, amount_arg, note @ ..] = args else {
        return Err(CommandError::Usage(
            "add-payment <client> <amount> [note...]".into(),
        ));
    };
    let amount: f64 = amount_arg
        .parse()
        .map_err(|_| CommandError::Invalid(format!("`{amount_arg}` is not an amount")))?;
    let notes = if note.is_empty() {
        None
    } else {
        Some(note.join(" "))
    };

    let id = context.find_client_id(needle)?;
    PaymentService::add(&mut context.roster, &id, amount, Utc::now(), notes)?;
    context.persist()?;
    output::success(format!("Recorded {} payment.", format_amount(amount)));
    Ok(())
}

pub(crate) fn list(context: &ShellContext, args: &[&str]) -> CommandResult {
    let [needle] = args else {
        return Err(CommandError::Usage("payments <client>".into()));
    };
    let id = context.find_client_id(needle)?;
    let client = context
        .roster
        .client(&id)
        .ok_or_else(|| CommandError::Invalid(format!("No client matches `{needle}`")))?;

    let ordered = display_order(&client.payments);
    if ordered.is_empty() {
        output::info("No payments recorded.");
        return Ok(());
    }
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
    output::plain(format!(
        "Total paid: {}",
        format_amount(total_paid(&client.payments))
    ));
    Ok(())
}

pub(crate) fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [needle, index_arg] = args else {
        return Err(CommandError::Usage("remove-payment <client> <index>".into()));
    };
    let index: usize = index_arg
        .parse()
        .map_err(|_| CommandError::Invalid(format!("`{index_arg}` is not an index")))?;

    let client_id = context.find_client_id(needle)?;
    let payment_id = {
        let client = context
            .roster
            .client(&client_id)
            .ok_or_else(|| CommandError::Invalid(format!("No client matches `{needle}`")))?;
        let ordered = display_order(&client.payments);
        ordered
            .get(index.wrapping_sub(1))
            .map(|payment| payment.id.clone())
            .ok_or_else(|| {
                CommandError::Invalid(format!(
                    "Payment index {index} is out of range (1..={})",
                    ordered.len()
                ))
            })?
    };

    PaymentService::remove(&mut context.roster, &client_id, &payment_id)?;
    context.persist()?;
    output::success("Payment removed.");
    Ok(())
}
