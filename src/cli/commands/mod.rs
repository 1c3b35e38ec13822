pub mod category;
pub mod client;
pub mod payment;
pub mod report;

use chrono::Utc;

use crate::subscription::Roster;

use super::core::{CommandError, LoopControl, ShellContext};
use super::output;

pub const COMMAND_NAMES: &[&str] = &[
    "list",
    "show",
    "add-client",
    "set-expiry",
    "remove-client",
    "categories",
    "add-category",
    "remove-category",
    "add-payment",
    "payments",
    "remove-payment",
    "report",
    "save",
    "reset",
    "help",
    "exit",
    "quit",
];

pub(crate) fn dispatch(
    context: &mut ShellContext,
    command: &str,
    args: &[&str],
) -> Result<LoopControl, CommandError> {
    match command {
        "help" => {
            print_help();
            Ok(LoopControl::Continue)
        }
        "exit" | "quit" => Ok(LoopControl::Exit),
        "list" => continue_with(client::list(context, args)),
        "show" => continue_with(client::show(context, args)),
        "add-client" => continue_with(client::add(context, args)),
        "set-expiry" => continue_with(client::set_expiry(context, args)),
        "remove-client" => continue_with(client::remove(context, args)),
        "categories" => continue_with(category::list(context)),
        "add-category" => continue_with(category::add(context, args)),
        "remove-category" => continue_with(category::remove(context, args)),
        "add-payment" => continue_with(payment::add(context, args)),
        "payments" => continue_with(payment::list(context, args)),
        "remove-payment" => continue_with(payment::remove(context, args)),
        "report" => continue_with(report::export(context, args)),
        "save" => continue_with(save(context)),
        "reset" => continue_with(reset(context)),
        unknown => {
            let mut message = format!("Unknown command `{unknown}`.");
            if let Some(suggestion) = context.suggest_command(unknown) {
                message.push_str(&format!(" Did you mean `{suggestion}`?"));
            }
            Err(CommandError::Invalid(message))
        }
    }
}

fn continue_with(result: Result<(), CommandError>) -> Result<LoopControl, CommandError> {
    result.map(|()| LoopControl::Continue)
}

fn save(context: &mut ShellContext) -> Result<(), CommandError> {
    context.persist()?;
    output::success(format!(
        "Roster saved to {}",
        context.storage.roster_path().display()
    ));
    Ok(())
}

fn reset(context: &mut ShellContext) -> Result<(), CommandError> {
    if !context.confirm("Reset all data to the seeded defaults?")? {
        output::info("Reset cancelled.");
        return Ok(());
    }
    context.roster = Roster::default_dataset(Utc::now());
    context.persist()?;
    output::success("Roster reset to the default dataset.");
    Ok(())
}

fn print_help() {
    output::section("Commands");
    output::plain(
        "\
list [name|expiry]                      List clients sorted by expiry (default) or name
show <client>                           Show client details, payments, and status
add-client <name> <category> <term>     Add a client (term: week, month, or year)
           [email] [phone]
set-expiry <client> <YYYY-MM-DD>        Edit the expiry date (re-derives the start date)
remove-client <client>                  Remove a client
categories                              List categories
add-category <name> [color]             Add a category
remove-category <category>              Remove a category (clients fall back to Unknown)
add-payment <client> <amount> [note..]  Record a payment
payments <client>                       List payments, most recent entry first
remove-payment <client> <index>         Remove a payment by its listed index
report <client> [path]                  Export a client report document
save                                    Write the roster to disk
reset                                   Restore the seeded default dataset
help                                    Show this list
exit | quit                             Leave the shell",
    );
}
