//! Command handlers for the CLI.

mod completions;
mod labels;
mod notes;
mod reminders;


use anyhow::{Context, Result, anyhow};
use chrono::FixedOffset;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::Cli;
use crate::cli::config::Config;
use crate::domain::{Clock, Owner};
use crate::service::{RequestContext, SubmitError};
use crate::store::SqliteStore;

// Re-export public items
pub use completions::handle_completions;
pub use labels::{handle_label, handle_labels};
pub use notes::{
    handle_add, handle_done, handle_edit, handle_list, handle_rm, handle_show, handle_upcoming,
};
pub use reminders::handle_reminders;

// Re-export for tests
#[cfg(test)]
pub(crate) use notes::{add_form, apply_edit};

// ===========================================
// Shared Utilities
// ===========================================

/// Settings every handler runs with, resolved from flags and config file.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub db_path: PathBuf,
    pub owner: Owner,
    pub offset: FixedOffset,
    pub per_page: u32,
    pub label_color: Option<i64>,
}

impl AppContext {
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        Ok(Self {
            db_path: config.database_path(cli.db.as_ref()),
            owner: config.owner(cli.user)?,
            offset: config.offset(cli.utc_offset.as_deref())?,
            per_page: config.notes_per_page(None),
            label_color: config.label_color,
        })
    }

    pub(crate) fn open_store(&self) -> Result<SqliteStore> {
        SqliteStore::open(&self.db_path)
            .with_context(|| format!("failed to open database at {}", self.db_path.display()))
    }

    /// Request context stamped with the current time.
    pub(crate) fn request(&self) -> RequestContext {
        RequestContext {
            owner: self.owner,
            clock: Clock::system(self.offset),
            label_color: self.label_color,
        }
    }
}

/// Parses a numeric id argument.
pub(crate) fn parse_id<T>(raw: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .with_context(|| format!("invalid {} id: '{}'", what, raw))
}

/// Prints form errors to stderr, one `field: message` per line, and turns
/// the rest into plain errors.
pub(crate) fn report_submit_error(err: SubmitError) -> anyhow::Error {
    match err {
        SubmitError::Invalid { errors, .. } => {
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field, message);
            }
            anyhow!("note not saved")
        }
        other => other.into(),
    }
}

/// Truncates to the first line and a maximum display width, adding an
/// ellipsis if anything was cut.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    let line = s.lines().next().unwrap_or("");
    let width = line.chars().count();
    if width <= max_width && line.len() == s.len() {
        line.to_string()
    } else if width < max_width {
        format!("{}…", line)
    } else {
        let truncated: String = line.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
