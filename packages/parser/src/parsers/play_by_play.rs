//! Play-by-play events.

use std::sync::LazyLock;

use courtside_stats_models::{PlayByPlayEvent, Team};
use regex::Regex;
use scraper::Html;

use super::missing_table;
use crate::{
    ParseError,
    abbreviations::team_from_name,
    html::{
        RowKind,
        play_by_play::{PLAY_BY_PLAY_TABLE_IDS, PlayByPlayPage, PlayByPlayRow},
    },
    time::{PeriodDetails, period_timestamp_to_seconds},
};

static SCORES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<away>\d+)-(?P<home>\d+)\s*$").unwrap_or_else(|_| unreachable!())
});

/// Splits a running score cell (`"102-99"`, away first).
///
/// # Errors
///
/// Returns [`ParseError::MalformedScores`] if the cell is not two
/// `-`-separated integers.
pub fn parse_scores(cell: &str) -> Result<(u32, u32), ParseError> {
    let malformed = || ParseError::MalformedScores(cell.to_owned());
    let caps = SCORES_REGEX.captures(cell).ok_or_else(malformed)?;
    let away = caps["away"].parse().map_err(|_| malformed())?;
    let home = caps["home"].parse().map_err(|_| malformed())?;
    Ok((away, home))
}

/// Parses a play-by-play page with NBA regulation (four quarters).
///
/// # Errors
///
/// See [`parse_play_by_play_with_periods`].
pub fn parse_play_by_play(document: &Html) -> Result<Vec<PlayByPlayEvent>, ParseError> {
    parse_play_by_play_with_periods(document, PeriodDetails::default())
}

/// Parses a play-by-play page.
///
/// Every period marker row advances a counter local to this call; the
/// first `periods.regulation_periods_count()` periods are quarters and the
/// rest are overtimes numbered from 1. Header and filler rows are skipped
/// without touching the counter.
///
/// # Errors
///
/// * [`ParseError::MissingTable`] if the page has no play-by-play table.
/// * [`ParseError::MissingCell`] if the scorebox does not name both teams.
/// * [`ParseError::MalformedScores`] or [`ParseError::MalformedTimestamp`]
///   for an event row whose control cells cannot be read.
pub fn parse_play_by_play_with_periods(
    document: &Html,
    periods: PeriodDetails,
) -> Result<Vec<PlayByPlayEvent>, ParseError> {
    let page = PlayByPlayPage::new(document);
    let table = page
        .table()
        .ok_or_else(|| missing_table(PLAY_BY_PLAY_TABLE_IDS))?;

    let away_team = scorebox_team(page.away_team_name(), "away")?;
    let home_team = scorebox_team(page.home_team_name(), "home")?;

    let mut period_count = 0_u32;
    let mut events = Vec::new();
    for row in table.event_rows() {
        match row.kind() {
            RowKind::PeriodMarker => period_count += 1,
            RowKind::Header | RowKind::Filler => {}
            RowKind::Data if period_count == 0 => {
                log::warn!("Skipping play-by-play row before the first period marker");
            }
            RowKind::Data => {
                events.push(parse_event(&row, period_count, periods, away_team, home_team)?);
            }
        }
    }

    log::debug!(
        "Parsed {} play-by-play events over {period_count} periods",
        events.len()
    );
    Ok(events)
}

fn scorebox_team(name: Option<String>, side: &str) -> Result<Team, ParseError> {
    let name = name.ok_or_else(|| ParseError::MissingCell(format!("{side} team in scorebox")))?;
    team_from_name(&name)
}

fn parse_event(
    row: &PlayByPlayRow<'_>,
    period_count: u32,
    periods: PeriodDetails,
    away_team: Team,
    home_team: Team,
) -> Result<PlayByPlayEvent, ParseError> {
    let (away_score, home_score) = parse_scores(&row.scores())?;
    let (relevant_team, description) = if row.is_away_team_play() {
        (away_team, row.away_team_description())
    } else {
        (home_team, row.home_team_description())
    };

    Ok(PlayByPlayEvent {
        period: periods.period_number(period_count),
        period_type: periods.period_type(period_count),
        remaining_seconds_in_period: period_timestamp_to_seconds(&row.timestamp())?,
        relevant_team,
        away_team,
        home_team,
        away_score,
        home_score,
        description,
    })
}

#[cfg(test)]
mod tests {
    use courtside_stats_models::PeriodType;

    use super::*;
    use crate::html::test_support::document;

    const SCOREBOX: &str = r#"
        <div class="scorebox">
          <div><strong><a>Milwaukee Bucks</a></strong></div>
          <div><strong><a>Boston Celtics</a></strong></div>
        </div>"#;

    fn marker(label: &str) -> String {
        format!(r#"<tr class="thead"><th colspan="6">{label}</th></tr>"#)
    }

    fn event(clock: &str, away: &str, scores: &str, home: &str) -> String {
        format!("<tr><td>{clock}</td><td>{away}</td><td></td><td>{scores}</td><td></td><td>{home}</td></tr>")
    }

    fn page(rows: &[String]) -> Html {
        document(&format!(
            r#"{SCOREBOX}<table id="pbp">{}</table>"#,
            rows.concat()
        ))
    }

    #[test]
    fn numbers_overtime_after_regulation() {
        let html = page(&[
            marker("1st Q"),
            marker("2nd Q"),
            marker("3rd Q"),
            marker("4th Q"),
            r#"<tr><td>0:00.0</td><td colspan="5">End of 4th quarter</td></tr>"#.to_owned(),
            marker("1st OT"),
            event("4:31.0", "", "110-112", "J. Tatum makes 2-pt jump shot"),
        ]);
        let events = parse_play_by_play(&html).unwrap();
        assert_eq!(events.len(), 1);
        let overtime = &events[0];
        assert_eq!(overtime.period, 1);
        assert_eq!(overtime.period_type, PeriodType::Overtime);
        assert_eq!(overtime.remaining_seconds_in_period, 271.0);
        assert_eq!(overtime.relevant_team, Team::BostonCeltics);
        assert_eq!((overtime.away_score, overtime.home_score), (110, 112));
    }

    #[test]
    fn period_counter_restarts_per_call() {
        let html = page(&[marker("1st Q"), event("11:45.0", "G. Antetokounmpo makes layup", "2-0", "")]);
        for _ in 0..2 {
            let events = parse_play_by_play(&html).unwrap();
            assert_eq!(events[0].period, 1);
            assert_eq!(events[0].period_type, PeriodType::Quarter);
            assert_eq!(events[0].relevant_team, Team::MilwaukeeBucks);
            assert_eq!(events[0].description, "G. Antetokounmpo makes layup");
        }
    }

    #[test]
    fn malformed_scores_raise() {
        let html = page(&[marker("1st Q"), event("11:45.0", "Jump ball", "tip", "")]);
        assert!(matches!(
            parse_play_by_play(&html),
            Err(ParseError::MalformedScores(_))
        ));
        assert_eq!(parse_scores("102-99").unwrap(), (102, 99));
    }

    #[test]
    fn missing_scorebox_is_an_error() {
        let html = document(r#"<table id="pbp"><tr><td>x</td></tr></table>"#);
        assert!(matches!(
            parse_play_by_play(&html),
            Err(ParseError::MissingCell(_))
        ));
    }
}
