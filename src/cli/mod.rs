//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// memo - notes with labels and reminders
#[derive(Parser, Debug)]
#[command(name = "memo", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Act as this user id (overrides config file)
    #[arg(short = 'u', long, global = true)]
    pub user: Option<i64>,

    /// UTC offset for reading and showing times, e.g. +02:00 (overrides config file)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub utc_offset: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    Add(AddArgs),

    /// Change a note's content, expiry, labels or reminders
    Edit(EditArgs),

    /// Show a note with its labels and reminders
    Show(ShowArgs),

    /// List notes, newest first
    #[command(name = "ls")]
    List(ListArgs),

    /// List open notes with an expiry, soonest first
    Upcoming(ListArgs),

    /// Toggle a note between done and undone
    Done(NoteArgs),

    /// Delete a note
    Rm(NoteArgs),

    /// List labels
    Labels(LabelsArgs),

    /// Create or delete a label
    #[command(subcommand)]
    Label(LabelCommand),

    /// List reminders
    Reminders(RemindersArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note content
    pub content: String,

    /// Expiry time (e.g. "2025-01-01 18:00", "tomorrow", "+3d")
    #[arg(short, long)]
    pub expires: Option<String>,

    /// Label id or name (can be specified multiple times)
    #[arg(short, long = "label", action = ArgAction::Append)]
    pub labels: Vec<String>,

    /// Email reminder time
    #[arg(long)]
    pub remind_email: Option<String>,

    /// SMS reminder time
    #[arg(long)]
    pub remind_sms: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
///
/// Fields not given keep their current value. An empty value clears an
/// optional field.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note id
    pub id: String,

    /// New content
    #[arg(short, long)]
    pub content: Option<String>,

    /// New expiry time
    #[arg(short, long)]
    pub expires: Option<String>,

    /// Replace the labels with these (can be specified multiple times)
    #[arg(short, long = "label", action = ArgAction::Append, conflicts_with = "no_labels")]
    pub labels: Vec<String>,

    /// Remove every label from the note
    #[arg(long)]
    pub no_labels: bool,

    /// Email reminder time
    #[arg(long)]
    pub remind_email: Option<String>,

    /// SMS reminder time
    #[arg(long)]
    pub remind_sms: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note id
    pub id: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for commands that take a single note id
#[derive(Parser, Debug)]
pub struct NoteArgs {
    /// Note id
    pub id: String,
}

/// Arguments for the `ls` and `upcoming` commands
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,

    /// Notes per page (overrides config file)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `labels` command
#[derive(Parser, Debug)]
pub struct LabelsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum LabelCommand {
    /// Create a label
    Add(LabelAddArgs),

    /// Delete a label and detach it from all notes
    Rm(LabelRmArgs),
}

/// Arguments for the `label add` command
#[derive(Parser, Debug)]
pub struct LabelAddArgs {
    /// Label name
    pub name: String,

    /// Palette color index (overrides config file)
    #[arg(short, long)]
    pub color: Option<i64>,
}

/// Arguments for the `label rm` command
#[derive(Parser, Debug)]
pub struct LabelRmArgs {
    /// Label id
    pub id: String,
}

/// Arguments for the `reminders` command
#[derive(Parser, Debug)]
pub struct RemindersArgs {
    /// Only unsent reminders whose time has come
    #[arg(long)]
    pub due: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
