//! Note command handlers.

use anyhow::{Context, Result};

use super::{AppContext, parse_id, report_submit_error, truncate_str};
use crate::cli::output::{NoteListing, OutputFormat, PageListing, print_json, print_note_view};
use crate::cli::{AddArgs, EditArgs, ListArgs, NoteArgs, ShowArgs};
use crate::domain::{NoteId, ReminderType, format_local};
use crate::service::{
    self, NoteForm, NoteView, create_note, edit_note, note_view, remove_note, toggle_status,
};
use crate::store::Page;

/// Builds the form `memo add` submits.
pub(crate) fn add_form(args: &AddArgs) -> NoteForm {
    let mut form = NoteForm {
        content: args.content.clone(),
        expires_at: args.expires.clone(),
        labels: args.labels.clone(),
        ..NoteForm::default()
    };
    set_reminders(&mut form, args.remind_email.as_deref(), args.remind_sms.as_deref());
    form
}

/// Applies `memo edit` flags on top of the note's current form.
pub(crate) fn apply_edit(mut form: NoteForm, args: &EditArgs) -> NoteForm {
    if let Some(content) = &args.content {
        form.content = content.clone();
    }
    if let Some(expires) = &args.expires {
        form.expires_at = Some(expires.clone());
    }
    if args.no_labels {
        form.labels.clear();
    } else if !args.labels.is_empty() {
        form.labels = args.labels.clone();
    }
    set_reminders(&mut form, args.remind_email.as_deref(), args.remind_sms.as_deref());
    form
}

fn set_reminders(form: &mut NoteForm, email: Option<&str>, sms: Option<&str>) {
    for (kind, raw) in [(ReminderType::Email, email), (ReminderType::Sms, sms)] {
        if let Some(raw) = raw {
            form.set_reminder(kind, raw);
        }
    }
}

fn print_saved(view: &NoteView, ctx: &AppContext, format: OutputFormat, verb: &str) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("{} note {}", verb, view.note.id);
            print_note_view(view, ctx.offset);
            Ok(())
        }
        OutputFormat::Json => print_json(view),
    }
}

pub fn handle_add(args: &AddArgs, ctx: &AppContext) -> Result<()> {
    let mut store = ctx.open_store()?;
    let view = create_note(&mut store, &ctx.request(), add_form(args))
        .map_err(report_submit_error)?;
    print_saved(&view, ctx, args.format, "Created")
}

pub fn handle_edit(args: &EditArgs, ctx: &AppContext) -> Result<()> {
    let id: NoteId = parse_id(&args.id, "note")?;
    let mut store = ctx.open_store()?;

    let current = note_view(&store, ctx.owner, id).map_err(report_submit_error)?;
    let form = apply_edit(NoteForm::from_view(&current, ctx.offset), args);

    let view = edit_note(&mut store, &ctx.request(), id, form).map_err(report_submit_error)?;
    print_saved(&view, ctx, args.format, "Updated")
}

pub fn handle_show(args: &ShowArgs, ctx: &AppContext) -> Result<()> {
    let id: NoteId = parse_id(&args.id, "note")?;
    let store = ctx.open_store()?;
    let view = note_view(&store, ctx.owner, id).map_err(report_submit_error)?;

    match args.format {
        OutputFormat::Human => {
            print_note_view(&view, ctx.offset);
            Ok(())
        }
        OutputFormat::Json => print_json(&view),
    }
}

pub fn handle_list(args: &ListArgs, ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store()?;
    let page = service::list_notes(&store, ctx.owner, args.page, per_page(args, ctx))
        .context("failed to list notes")?;
    print_page(&page, ctx, args.format)
}

pub fn handle_upcoming(args: &ListArgs, ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store()?;
    let page = service::list_upcoming(&store, ctx.owner, args.page, per_page(args, ctx))
        .context("failed to list upcoming notes")?;
    print_page(&page, ctx, args.format)
}

fn per_page(args: &ListArgs, ctx: &AppContext) -> u32 {
    args.per_page.filter(|n| *n > 0).unwrap_or(ctx.per_page)
}

fn print_page(page: &Page<NoteView>, ctx: &AppContext, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if page.items.is_empty() {
                println!("No notes found.");
                return Ok(());
            }

            println!(
                "{:>6}  {:<4}  {:<40}  {:<16}  {}",
                "ID", "Done", "Content", "Expires", "Labels"
            );
            println!(
                "{:>6}  {:<4}  {:<40}  {:<16}  {}",
                "------", "----", "----------------------------------------", "----------------", "------"
            );
            for view in &page.items {
                let note = &view.note;
                let done = if note.done { "x" } else { "" };
                let expires = note
                    .expires_at
                    .map(|at| format_local(at, ctx.offset))
                    .unwrap_or_default();
                let labels: Vec<_> = view.labels.iter().map(|l| l.name.as_str()).collect();
                println!(
                    "{:>6}  {:<4}  {:<40}  {:<16}  {}",
                    note.id,
                    done,
                    truncate_str(&note.content, 40),
                    expires,
                    labels.join(", ")
                );
            }

            println!();
            print!("Page {}, {} note(s)", page.page, page.items.len());
            if page.has_more {
                print!(" (more on page {})", page.page + 1);
            }
            println!();
            Ok(())
        }
        OutputFormat::Json => print_json(PageListing {
            page: page.page,
            has_more: page.has_more,
            items: page.items.iter().map(NoteListing::from).collect(),
        }),
    }
}

pub fn handle_done(args: &NoteArgs, ctx: &AppContext) -> Result<()> {
    let id: NoteId = parse_id(&args.id, "note")?;
    let mut store = ctx.open_store()?;
    let note = toggle_status(&mut store, ctx.owner, id).map_err(report_submit_error)?;

    let status = if note.done { "done" } else { "open" };
    println!("Marked note {} as {}", note.id, status);
    Ok(())
}

pub fn handle_rm(args: &NoteArgs, ctx: &AppContext) -> Result<()> {
    let id: NoteId = parse_id(&args.id, "note")?;
    let mut store = ctx.open_store()?;
    remove_note(&mut store, ctx.owner, id).map_err(report_submit_error)?;

    println!("Deleted note {}", id);
    Ok(())
}
