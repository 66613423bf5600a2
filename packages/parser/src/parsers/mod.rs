//! Markup wrappers in, normalized records out.
//!
//! Each parser takes a parsed document, walks the rows of its page kind
//! through a single match on [`crate::html::RowKind`], and coerces the
//! remaining cells. Statistics that are blank or unparseable become `None`.
//! Control data (team codes, outcomes, scores) that fails to parse is an
//! error.

pub mod box_score;
pub mod game_log;
pub mod history;
pub mod play_by_play;
pub mod roster;
pub mod schedule;
pub mod search;
pub mod season_totals;
pub mod standings;

use courtside_stats_models::StatLine;

use crate::{
    ParseError, coerce,
    html::{CountingStat, CountingStats},
};

/// Collects the standard counting statistics of a row.
pub(crate) fn stat_line<'a>(row: &impl CountingStats<'a>) -> StatLine {
    let stat = |stat: CountingStat| coerce::count(&row.counting_stat(stat));
    StatLine {
        made_field_goals: stat(CountingStat::MadeFieldGoals),
        attempted_field_goals: stat(CountingStat::AttemptedFieldGoals),
        made_three_point_field_goals: stat(CountingStat::MadeThreePointFieldGoals),
        attempted_three_point_field_goals: stat(CountingStat::AttemptedThreePointFieldGoals),
        made_free_throws: stat(CountingStat::MadeFreeThrows),
        attempted_free_throws: stat(CountingStat::AttemptedFreeThrows),
        offensive_rebounds: stat(CountingStat::OffensiveRebounds),
        defensive_rebounds: stat(CountingStat::DefensiveRebounds),
        assists: stat(CountingStat::Assists),
        steals: stat(CountingStat::Steals),
        blocks: stat(CountingStat::Blocks),
        turnovers: stat(CountingStat::Turnovers),
        personal_fouls: stat(CountingStat::PersonalFouls),
        points: stat(CountingStat::Points),
    }
}

/// Error for a page whose expected table is absent.
pub(crate) fn missing_table(ids: &[&str]) -> ParseError {
    ParseError::MissingTable(ids.join(" | "))
}
