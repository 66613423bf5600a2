//! A player's season game log.

use std::sync::LazyLock;

use courtside_stats_models::{PlayerGameLog, StatLine};
use regex::Regex;
use scraper::Html;

use super::{missing_table, stat_line};
use crate::{
    ParseError,
    abbreviations::{location_from_abbreviation, outcome_from_abbreviation, team_from_abbreviation},
    coerce,
    html::{
        TeamIdentity,
        game_log::{GAME_LOG_TABLE_IDS, GameLogRow, GameLogTable},
    },
    time::clock_to_seconds,
};

static OUTCOME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([WL])(?:[\s,(]|$)").unwrap_or_else(|_| unreachable!()));

static MARGIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([+-]\d+)\)").unwrap_or_else(|_| unreachable!()));

static FINAL_SCORE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)-(\d+)").unwrap_or_else(|_| unreachable!()));

/// Extracts the leading `W`/`L` token of an outcome cell such as
/// `"W, 110-95"`, `"L (OT)"` or `"W (+9)"`.
///
/// # Errors
///
/// Returns [`ParseError::MalformedOutcome`] when the cell does not start
/// with a standalone `W` or `L`.
pub fn parse_outcome_abbreviation(cell: &str) -> Result<&str, ParseError> {
    OUTCOME_REGEX
        .captures(cell)
        .and_then(|caps| caps.get(1))
        .map(|token| token.as_str())
        .ok_or_else(|| ParseError::MalformedOutcome(cell.to_owned()))
}

/// The point differential printed in an outcome cell, either as `(+9)` or
/// as a final score `110-95` (player's team first).
fn parse_margin(cell: &str) -> Option<i32> {
    if let Some(caps) = MARGIN_REGEX.captures(cell) {
        return coerce::signed(&caps[1]);
    }
    let caps = FINAL_SCORE_REGEX.captures(cell)?;
    let team: i32 = caps[1].parse().ok()?;
    let opponent: i32 = caps[2].parse().ok()?;
    Some(team - opponent)
}

/// Parses every game of a season game log.
///
/// Games the player sat out are dropped unless `include_inactive_games` is
/// set; when kept, all of their statistics are `None` rather than zero.
///
/// # Errors
///
/// * [`ParseError::MissingTable`] if the page has no game log table.
/// * [`ParseError::MalformedOutcome`] for a result cell without `W`/`L`.
/// * [`ParseError::UnknownAbbreviation`] for an unrecognized team or
///   location code.
pub fn parse_game_log(
    document: &Html,
    include_inactive_games: bool,
) -> Result<Vec<PlayerGameLog>, ParseError> {
    let table = GameLogTable::find(document).ok_or_else(|| missing_table(GAME_LOG_TABLE_IDS))?;

    let mut games = Vec::new();
    for row in table.game_rows() {
        if !row.0.is_data() {
            continue;
        }
        let active = row.is_active();
        if !active && !include_inactive_games {
            continue;
        }
        games.push(parse_row(&row, active)?);
    }

    log::debug!("Parsed {} game log rows", games.len());
    Ok(games)
}

fn parse_row(row: &GameLogRow<'_>, active: bool) -> Result<PlayerGameLog, ParseError> {
    let result = row.result();
    let outcome = outcome_from_abbreviation(parse_outcome_abbreviation(&result)?)?;

    let mut game = PlayerGameLog {
        date: coerce::iso_date(&row.date()),
        team: team_from_abbreviation(&row.team_code())?,
        location: location_from_abbreviation(&row.location())?,
        opponent: team_from_abbreviation(&row.opponent_code())?,
        outcome,
        margin: parse_margin(&result),
        active,
        started: None,
        seconds_played: None,
        stats: StatLine::default(),
        game_score: None,
        plus_minus: None,
    };

    if active {
        game.started = match row.starter_indicator().as_str() {
            "1" | "*" => Some(true),
            "0" | "" => Some(false),
            _ => None,
        };
        game.seconds_played = Some(clock_to_seconds(&row.minutes_played())?);
        game.stats = stat_line(row);
        game.game_score = coerce::decimal(&row.game_score());
        game.plus_minus = coerce::signed(&row.plus_minus());
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use courtside_stats_models::{Location, Outcome, Team};

    use super::*;
    use crate::html::test_support::document;

    const GAME_LOG: &str = r#"
        <table id="pgl_basic"><tbody>
          <tr><th data-stat="ranker">1</th>
              <td data-stat="date_game">2019-10-22</td><td data-stat="team_id">LAL</td>
              <td data-stat="game_location">@</td><td data-stat="opp_id">LAC</td>
              <td data-stat="game_result">L (-10)</td><td data-stat="gs">1</td>
              <td data-stat="mp">36:00</td><td data-stat="pts">18</td>
              <td data-stat="game_score">14.9</td><td data-stat="plus_minus">-8</td></tr>
          <tr class="thead"><th>Rk</th><th>Date</th></tr>
          <tr><th data-stat="ranker">2</th>
              <td data-stat="date_game">2019-10-25</td><td data-stat="team_id">LAL</td>
              <td data-stat="game_location"></td><td data-stat="opp_id">UTA</td>
              <td data-stat="game_result">W, 95-86</td>
              <td data-stat="reason" colspan="21">Inactive</td></tr>
        </tbody></table>"#;

    #[test]
    fn extracts_leading_outcome_token() {
        assert_eq!(parse_outcome_abbreviation("W, (1, 0)").unwrap(), "W");
        assert_eq!(parse_outcome_abbreviation("W, 110-95").unwrap(), "W");
        assert_eq!(parse_outcome_abbreviation("L (OT)").unwrap(), "L");
        assert_eq!(parse_outcome_abbreviation("L").unwrap(), "L");
    }

    #[test]
    fn outcome_without_token_raises() {
        for cell in ["", "(1, 0)", "Win", "T, 100-100"] {
            assert!(
                matches!(
                    parse_outcome_abbreviation(cell),
                    Err(ParseError::MalformedOutcome(_))
                ),
                "{cell:?} should not parse"
            );
        }
    }

    #[test]
    fn reads_margin_in_either_layout() {
        assert_eq!(parse_margin("W (+9)"), Some(9));
        assert_eq!(parse_margin("L (-10)"), Some(-10));
        assert_eq!(parse_margin("W, 95-86"), Some(9));
        assert_eq!(parse_margin("L (OT)"), None);
    }

    #[test]
    fn skips_inactive_games_by_default() {
        let html = document(GAME_LOG);
        let games = parse_game_log(&html, false).unwrap();
        assert_eq!(games.len(), 1);
        let game = &games[0];
        assert_eq!(game.team, Team::LosAngelesLakers);
        assert_eq!(game.opponent, Team::LosAngelesClippers);
        assert_eq!(game.location, Location::Away);
        assert_eq!(game.outcome, Outcome::Loss);
        assert_eq!(game.margin, Some(-10));
        assert_eq!(game.started, Some(true));
        assert_eq!(game.seconds_played, Some(2160));
        assert_eq!(game.stats.points, Some(18));
        assert_eq!(game.plus_minus, Some(-8));
    }

    #[test]
    fn inactive_games_have_null_stats() {
        let html = document(GAME_LOG);
        let games = parse_game_log(&html, true).unwrap();
        assert_eq!(games.len(), 2);
        let inactive = &games[1];
        assert!(!inactive.active);
        assert_eq!(inactive.outcome, Outcome::Win);
        assert_eq!(inactive.location, Location::Home);
        assert_eq!(inactive.started, None);
        assert_eq!(inactive.seconds_played, None);
        assert_eq!(inactive.stats, StatLine::default());
        assert_eq!(inactive.game_score, None);
    }
}
