//! Configuration file support.

use anyhow::{Context, Result, bail};
use chrono::{FixedOffset, Local, Offset, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::Owner;

/// Notes per page when neither the flag nor the config file says otherwise.
pub const DEFAULT_NOTES_PER_PAGE: u32 = 20;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database file
    pub database: Option<PathBuf>,

    /// User id commands act as
    pub user: Option<i64>,

    /// Offset naive times are read and shown in, e.g. "+02:00"
    pub utc_offset: Option<String>,

    /// Page size for `ls` and `upcoming`
    pub notes_per_page: Option<u32>,

    /// Color given to new labels
    pub label_color: Option<i64>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, defaulting if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/memo/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("memo")
            .join("config.toml")
    }

    /// Resolve the database file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `database` setting
    /// 3. `memo/memo.db` under the user data directory
    pub fn database_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("memo")
                    .join("memo.db")
            })
    }

    /// Resolve the acting user, defaulting to user 1.
    pub fn owner(&self, cli_user: Option<i64>) -> Result<Owner> {
        let id = cli_user.or(self.user).unwrap_or(1);
        if id <= 0 {
            bail!("invalid user id: {}", id);
        }
        Ok(Owner::new(id))
    }

    /// Resolve the UTC offset, falling back to the system's current one.
    pub fn offset(&self, cli_offset: Option<&str>) -> Result<FixedOffset> {
        match cli_offset.or(self.utc_offset.as_deref()) {
            Some(raw) => parse_offset(raw),
            None => Ok(Local::now().offset().fix()),
        }
    }

    pub fn notes_per_page(&self, cli_per_page: Option<u32>) -> u32 {
        cli_per_page
            .or(self.notes_per_page)
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_NOTES_PER_PAGE)
    }
}

/// Parses `Z`, `UTC`, `+HH:MM`, `-HH:MM` or `+HHMM`.
pub fn parse_offset(raw: &str) -> Result<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    let (sign, rest) = match raw.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => bail!("invalid UTC offset '{}': expected +HH:MM or -HH:MM", raw),
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        bail!("invalid UTC offset '{}': expected +HH:MM or -HH:MM", raw);
    }

    let hours: i32 = digits[..2].parse()?;
    let minutes: i32 = digits[2..].parse()?;
    if hours > 23 || minutes > 59 {
        bail!("UTC offset '{}' out of range", raw);
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .with_context(|| format!("UTC offset '{}' out of range", raw))
}
