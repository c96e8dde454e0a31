//! Free-form date/time input parsing for expiry and reminder fields.

use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, SubsecRound,
    TimeZone, Timelike, Utc,
};
use thiserror::Error;

/// Naive date-time layouts tried in order. Interpreted in the clock's offset.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

/// Date-only layouts. The time is midnight in the clock's offset.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y"];

/// Errors produced by [`parse_when`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    #[error("date/time cannot be empty")]
    Empty,

    #[error("unrecognized date/time '{0}'")]
    Unrecognized(String),

    #[error("date/time out of range: {0}")]
    OutOfRange(String),
}

/// The current instant together with the offset naive input is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    pub now: DateTime<Utc>,
    pub offset: FixedOffset,
}

impl Clock {
    /// A clock reading the system time, cut to whole seconds.
    pub fn system(offset: FixedOffset) -> Self {
        Self {
            now: Utc::now().trunc_subsecs(0),
            offset,
        }
    }

    /// A clock frozen at `now`.
    pub fn fixed(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    /// A clock frozen at `now`, reading naive input as UTC.
    pub fn utc(now: DateTime<Utc>) -> Self {
        Self::fixed(now, utc_offset())
    }

    fn local_midnight(&self, days_ahead: i64) -> Result<DateTime<Utc>, ParseTimeError> {
        let today = self.now.with_timezone(&self.offset).date_naive();
        let day = Duration::try_days(days_ahead)
            .and_then(|d| today.checked_add_signed(d))
            .ok_or_else(|| ParseTimeError::OutOfRange(format!("{} days ahead", days_ahead)))?;
        self.localize(day.and_time(NaiveTime::MIN))
    }

    fn localize(&self, naive: NaiveDateTime) -> Result<DateTime<Utc>, ParseTimeError> {
        self.offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| ParseTimeError::OutOfRange(naive.to_string()))
    }
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Parses a user-entered date/time into an absolute instant.
///
/// Accepts:
/// - RFC 3339 with its own offset: "2025-01-01T10:00:00+02:00"
/// - "YYYY-MM-DD HH:MM[:SS]", "YYYY-MM-DDTHH:MM[:SS]", "YYYY-MM-DD"
/// - "DD.MM.YYYY HH:MM[:SS]", "DD.MM.YYYY"
/// - "now", "today", "tomorrow"
/// - Relative offsets from now: "+30m", "+2h", "+3d", "+1w"
///
/// Input without an offset is read in `clock.offset`. Results are whole
/// seconds, so [`format_local`] output parses back to the same instant.
pub fn parse_when(input: &str, clock: &Clock) -> Result<DateTime<Utc>, ParseTimeError> {
    parse_instant(input, clock).map(|at| at.trunc_subsecs(0))
}

fn parse_instant(input: &str, clock: &Clock) -> Result<DateTime<Utc>, ParseTimeError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseTimeError::Empty);
    }

    match s.to_ascii_lowercase().as_str() {
        "now" => return Ok(clock.now),
        "today" => return clock.local_midnight(0),
        "tomorrow" => return clock.local_midnight(1),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix('+') {
        return parse_relative(s, rest, clock);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return clock.localize(naive);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return clock.localize(date.and_time(NaiveTime::MIN));
        }
    }

    Err(ParseTimeError::Unrecognized(s.to_string()))
}

fn parse_relative(input: &str, rest: &str, clock: &Clock) -> Result<DateTime<Utc>, ParseTimeError> {
    let unrecognized = || ParseTimeError::Unrecognized(input.to_string());

    let unit = rest.chars().last().ok_or_else(unrecognized)?;
    let amount = &rest[..rest.len() - unit.len_utf8()];
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unrecognized());
    }
    let amount: i64 = amount
        .parse()
        .map_err(|_| ParseTimeError::OutOfRange(input.to_string()))?;

    let delta = match unit.to_ascii_lowercase() {
        'm' => Duration::try_minutes(amount),
        'h' => Duration::try_hours(amount),
        'd' => Duration::try_days(amount),
        'w' => Duration::try_weeks(amount),
        _ => return Err(unrecognized()),
    };

    delta
        .and_then(|d| clock.now.checked_add_signed(d))
        .ok_or_else(|| ParseTimeError::OutOfRange(input.to_string()))
}

/// Formats an instant in `offset` so that [`parse_when`] reads it back unchanged.
pub fn format_local(at: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = at.with_timezone(&offset);
    if local.second() == 0 && local.nanosecond() == 0 {
        local.format("%Y-%m-%d %H:%M").to_string()
    } else {
        local.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
