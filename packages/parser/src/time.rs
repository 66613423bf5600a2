//! Clock, period and season parsers.

use std::sync::LazyLock;

use courtside_stats_models::PeriodType;
use regex::Regex;

use crate::ParseError;

/// Quarters in a regulation NBA game.
pub const NBA_REGULATION_PERIODS: u32 = 4;

static PERIOD_TIMESTAMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<minutes>\d+):(?P<seconds>\d+(?:\.\d+)?)$").unwrap_or_else(|_| unreachable!())
});

static SEASON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<start>\d{4})-(?P<end>\d{2})$").unwrap_or_else(|_| unreachable!())
});

/// Converts a `minutes:seconds` clock string to whole seconds.
///
/// Minutes are not bounded by 59: cumulative season and career minutes
/// routinely exceed an hour (`"75:03"` is 4503 seconds). An empty string is
/// zero.
///
/// # Errors
///
/// Returns [`ParseError::MalformedClock`] when the string is not two
/// `:`-separated integers or the seconds field is 60 or more.
pub fn clock_to_seconds(clock: &str) -> Result<u32, ParseError> {
    let trimmed = clock.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let malformed = || ParseError::MalformedClock(clock.to_owned());
    let (minutes, seconds) = trimmed.split_once(':').ok_or_else(malformed)?;
    let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
    let seconds: u32 = seconds.parse().map_err(|_| malformed())?;
    if seconds >= 60 {
        return Err(malformed());
    }

    minutes
        .checked_mul(60)
        .and_then(|total| total.checked_add(seconds))
        .ok_or_else(malformed)
}

/// Formats whole seconds as `M:SS`, the inverse of [`clock_to_seconds`].
#[must_use]
pub fn seconds_to_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Converts a play-by-play timestamp (`"11:45.0"`) to the seconds remaining
/// in the period.
///
/// # Errors
///
/// Returns [`ParseError::MalformedTimestamp`] if the cell does not match.
pub fn period_timestamp_to_seconds(timestamp: &str) -> Result<f64, ParseError> {
    let trimmed = timestamp.trim();
    let malformed = || ParseError::MalformedTimestamp(timestamp.to_owned());
    let caps = PERIOD_TIMESTAMP_REGEX.captures(trimmed).ok_or_else(malformed)?;
    let minutes: f64 = caps["minutes"].parse().map_err(|_| malformed())?;
    let seconds: f64 = caps["seconds"].parse().map_err(|_| malformed())?;
    Ok(minutes.mul_add(60.0, seconds))
}

/// Converts a season label (`"2003-04"`, `"1999-00"`) to the calendar year
/// the season ends in.
///
/// # Errors
///
/// Returns [`ParseError::MalformedSeason`] if the label does not match or
/// its two halves are not consecutive years.
pub fn season_end_year(season: &str) -> Result<i32, ParseError> {
    let trimmed = season.trim();
    let malformed = || ParseError::MalformedSeason(season.to_owned());
    let caps = SEASON_REGEX.captures(trimmed).ok_or_else(malformed)?;
    let start: i32 = caps["start"].parse().map_err(|_| malformed())?;
    let end_suffix: i32 = caps["end"].parse().map_err(|_| malformed())?;
    let end = start + 1;
    if end % 100 != end_suffix {
        return Err(malformed());
    }
    Ok(end)
}

/// Maps a running period count onto quarter/overtime numbering.
///
/// The first `regulation_periods_count` periods are quarters numbered from
/// 1; every later period is an overtime, also numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodDetails {
    regulation_periods_count: u32,
}

impl Default for PeriodDetails {
    fn default() -> Self {
        Self::new(NBA_REGULATION_PERIODS)
    }
}

impl PeriodDetails {
    #[must_use]
    pub const fn new(regulation_periods_count: u32) -> Self {
        Self {
            regulation_periods_count,
        }
    }

    #[must_use]
    pub const fn regulation_periods_count(&self) -> u32 {
        self.regulation_periods_count
    }

    #[must_use]
    pub const fn is_overtime(&self, period_count: u32) -> bool {
        period_count > self.regulation_periods_count
    }

    #[must_use]
    pub const fn period_type(&self, period_count: u32) -> PeriodType {
        if self.is_overtime(period_count) {
            PeriodType::Overtime
        } else {
            PeriodType::Quarter
        }
    }

    /// Returns the period number within its type (quarter 1-4, or
    /// overtime 1, 2, ...).
    #[must_use]
    pub const fn period_number(&self, period_count: u32) -> u32 {
        if self.is_overtime(period_count) {
            period_count - self.regulation_periods_count
        } else {
            period_count
        }
    }
}
