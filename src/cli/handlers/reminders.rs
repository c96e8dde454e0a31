//! Reminders command handler.

use anyhow::{Context, Result};

use super::AppContext;
use crate::cli::RemindersArgs;
use crate::cli::output::{OutputFormat, ReminderListing, print_json};
use crate::domain::format_local;

pub fn handle_reminders(args: &RemindersArgs, ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store()?;
    let due_at = args.due.then_some(ctx.request().clock.now);
    let reminders = store
        .reminders(ctx.owner, due_at)
        .context("failed to list reminders")?;

    match args.format {
        OutputFormat::Human => {
            if reminders.is_empty() {
                println!("No reminders found.");
                return Ok(());
            }

            println!("{:>6}  {:>6}  {:<6}  {:<16}  {}", "ID", "Note", "Type", "Time", "Sent");
            for reminder in &reminders {
                println!(
                    "{:>6}  {:>6}  {:<6}  {:<16}  {}",
                    reminder.id,
                    reminder.note_id,
                    reminder.kind,
                    format_local(reminder.remind_at, ctx.offset),
                    if reminder.sent { "yes" } else { "no" }
                );
            }
            Ok(())
        }
        OutputFormat::Json => {
            let listings: Vec<ReminderListing> =
                reminders.iter().map(ReminderListing::from).collect();
            print_json(listings)
        }
    }
}
