//! Executive and referee career histories.

use courtside_stats_models::{ExecutiveSeason, RefereeSeason};
use scraper::Html;

use super::missing_table;
use crate::{
    ParseError,
    abbreviations::{league_from_abbreviation, team_from_optional_abbreviation},
    coerce,
    html::{
        TeamIdentity,
        history::{EXECUTIVE_TABLE_IDS, HistoryRow, HistoryTable, REFEREE_TABLE_IDS},
    },
    time::season_end_year,
};

fn season_rows<'a>(table: &HistoryTable<'a>) -> impl Iterator<Item = HistoryRow<'a>> {
    table
        .season_rows()
        .into_iter()
        .filter(|row| row.0.is_data() && !row.season().is_empty())
}

/// Parses an executive's front-office history, one record per season.
///
/// # Errors
///
/// * [`ParseError::MissingTable`] if the page has no executive table.
/// * [`ParseError::MalformedSeason`] for an unreadable season label.
/// * [`ParseError::UnknownAbbreviation`] for an unknown team or league.
pub fn parse_executive_history(document: &Html) -> Result<Vec<ExecutiveSeason>, ParseError> {
    let table =
        HistoryTable::find_executive(document).ok_or_else(|| missing_table(EXECUTIVE_TABLE_IDS))?;

    season_rows(&table)
        .map(|row| -> Result<ExecutiveSeason, ParseError> {
            Ok(ExecutiveSeason {
                season_end_year: season_end_year(&row.season())?,
                team: team_from_optional_abbreviation(&row.team_code())?,
                league: league_from_abbreviation(&row.league())?,
                role: coerce::non_empty(&row.role()).map(str::to_owned),
                wins: coerce::count(&row.wins()),
                losses: coerce::count(&row.losses()),
            })
        })
        .collect()
}

/// Parses a referee's officiating history, one record per season.
///
/// # Errors
///
/// * [`ParseError::MissingTable`] if the page has no referee table.
/// * [`ParseError::MalformedSeason`] for an unreadable season label.
/// * [`ParseError::UnknownAbbreviation`] for an unknown league.
pub fn parse_referee_history(document: &Html) -> Result<Vec<RefereeSeason>, ParseError> {
    let table =
        HistoryTable::find_referee(document).ok_or_else(|| missing_table(REFEREE_TABLE_IDS))?;

    season_rows(&table)
        .map(|row| -> Result<RefereeSeason, ParseError> {
            Ok(RefereeSeason {
                season_end_year: season_end_year(&row.season())?,
                league: league_from_abbreviation(&row.league())?,
                regular_season_games: coerce::count(&row.regular_season_games()),
                playoff_games: coerce::count(&row.playoff_games()),
            })
        })
        .collect()
}
