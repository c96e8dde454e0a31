//! Output format types for CLI commands.

use chrono::{DateTime, FixedOffset, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Label, Reminder, format_local};
use crate::service::NoteView;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A page of listing output.
#[derive(Debug, Serialize)]
pub struct PageListing<T: Serialize> {
    pub page: u32,
    pub has_more: bool,
    pub items: Vec<T>,
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: i64,
    pub content: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub labels: Vec<String>,
}

impl From<&NoteView> for NoteListing {
    fn from(view: &NoteView) -> Self {
        Self {
            id: view.note.id.get(),
            content: view.note.content.clone(),
            done: view.note.done,
            expires_at: view.note.expires_at,
            labels: view.labels.iter().map(|l| l.name.clone()).collect(),
        }
    }
}

/// A label in listing output.
#[derive(Debug, Serialize)]
pub struct LabelListing {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<i64>,
}

impl From<&Label> for LabelListing {
    fn from(label: &Label) -> Self {
        Self {
            id: label.id.get(),
            name: label.name.clone(),
            color: label.color,
        }
    }
}

/// A reminder in listing output.
#[derive(Debug, Serialize)]
pub struct ReminderListing {
    pub id: i64,
    pub note_id: i64,
    pub kind: String,
    pub remind_at: DateTime<Utc>,
    pub sent: bool,
}

impl From<&Reminder> for ReminderListing {
    fn from(reminder: &Reminder) -> Self {
        Self {
            id: reminder.id.get(),
            note_id: reminder.note_id.get(),
            kind: reminder.kind.to_string(),
            remind_at: reminder.remind_at,
            sent: reminder.sent,
        }
    }
}

/// Prints a note with its labels and reminders, times in `offset`.
pub fn print_note_view(view: &NoteView, offset: FixedOffset) {
    let note = &view.note;
    let status = if note.done { "done" } else { "open" };
    println!("#{}  [{}]", note.id, status);
    println!("{}", note.content);
    println!();
    println!("Created: {}", format_local(note.created_at, offset));
    if let Some(at) = note.expires_at {
        println!("Expires: {}", format_local(at, offset));
    }
    if !view.labels.is_empty() {
        let labels: Vec<_> = view
            .labels
            .iter()
            .map(|l| format!("{} ({})", l.name, l.id))
            .collect();
        println!("Labels: {}", labels.join(", "));
    }
    for reminder in &view.reminders {
        let sent = if reminder.sent { " (sent)" } else { "" };
        println!(
            "Reminder {}: {}{}",
            reminder.kind,
            format_local(reminder.remind_at, offset),
            sent
        );
    }
}

/// Prints `value` wrapped in [`Output`] as pretty JSON.
pub fn print_json<T: Serialize>(value: T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&Output::new(value))?);
    Ok(())
}
