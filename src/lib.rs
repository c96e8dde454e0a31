//! memo - notes with labels and reminders

pub mod cli;
pub mod domain;
pub mod logging;
pub mod reconcile;
pub mod service;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        AppContext, handle_add, handle_completions, handle_done, handle_edit, handle_label,
        handle_labels, handle_list, handle_reminders, handle_rm, handle_show, handle_upcoming,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let ctx = AppContext::resolve(&cli, &config)?;
    tracing::debug!(db = %ctx.db_path.display(), owner = %ctx.owner, "resolved settings");

    match &cli.command {
        Command::Add(args) => handle_add(args, &ctx),
        Command::Edit(args) => handle_edit(args, &ctx),
        Command::Show(args) => handle_show(args, &ctx),
        Command::List(args) => handle_list(args, &ctx),
        Command::Upcoming(args) => handle_upcoming(args, &ctx),
        Command::Done(args) => handle_done(args, &ctx),
        Command::Rm(args) => handle_rm(args, &ctx),
        Command::Labels(args) => handle_labels(args, &ctx),
        Command::Label(command) => handle_label(command, &ctx),
        Command::Reminders(args) => handle_reminders(args, &ctx),
        Command::Completions(args) => handle_completions(args),
    }
}
