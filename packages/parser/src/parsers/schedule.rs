//! Season schedule pages.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone as _};
use chrono_tz::{America::New_York, Tz};
use courtside_stats_models::ScheduledGame;
use scraper::Html;

use super::missing_table;
use crate::{
    ParseError,
    abbreviations::team_from_name,
    coerce,
    html::schedule::{SCHEDULE_TABLE_IDS, SchedulePage},
};

const DATE_FORMAT: &str = "%a, %b %d, %Y";
const TIME_OF_DAY_FORMAT: &str = "%I:%M%p";

/// Parses a schedule row's date and time-of-day cells into a tip-off time
/// in `timezone`.
///
/// Times are printed in US Eastern. Seasons through 2017 print `"7:30 pm"`;
/// later ones print `"7:30p"`. An empty time cell yields local midnight
/// Eastern on that date.
///
/// # Errors
///
/// Returns [`ParseError::MalformedDate`] if either cell matches no known
/// layout, or the local time does not exist in US Eastern.
pub fn parse_start_time(
    date: &str,
    time_of_day: &str,
    timezone: Tz,
) -> Result<DateTime<FixedOffset>, ParseError> {
    let day = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| ParseError::MalformedDate(date.to_owned()))?;

    let time = match coerce::non_empty(time_of_day) {
        None => NaiveTime::MIN,
        Some(cell) => parse_time_of_day(cell)
            .ok_or_else(|| ParseError::MalformedDate(time_of_day.to_owned()))?,
    };

    let eastern = New_York
        .from_local_datetime(&NaiveDateTime::new(day, time))
        .earliest()
        .ok_or_else(|| ParseError::MalformedDate(format!("{date} {time_of_day}")))?;

    Ok(eastern.with_timezone(&timezone).fixed_offset())
}

fn parse_time_of_day(cell: &str) -> Option<NaiveTime> {
    let mut compact: String = cell.chars().filter(|c| !c.is_whitespace()).collect();
    compact.make_ascii_lowercase();
    if compact.ends_with('a') || compact.ends_with('p') {
        compact.push('m');
    }
    NaiveTime::parse_from_str(&compact, TIME_OF_DAY_FORMAT).ok()
}

/// Parses every game of a monthly schedule page, converting tip-off times
/// to `timezone`.
///
/// # Errors
///
/// * [`ParseError::MissingTable`] if the page has no schedule table.
/// * [`ParseError::MalformedDate`] for an unreadable date or time cell.
/// * [`ParseError::UnknownAbbreviation`] for an unrecognized team name.
pub fn parse_schedule(document: &Html, timezone: Tz) -> Result<Vec<ScheduledGame>, ParseError> {
    let table = SchedulePage::new(document)
        .table()
        .ok_or_else(|| missing_table(SCHEDULE_TABLE_IDS))?;

    let mut games = Vec::new();
    for row in table.game_rows() {
        if !row.0.is_data() {
            continue;
        }
        games.push(ScheduledGame {
            start_time: parse_start_time(&row.date(), &row.start_time_of_day(), timezone)?,
            away_team: team_from_name(&row.away_team_name())?,
            home_team: team_from_name(&row.home_team_name())?,
            away_team_score: coerce::count(&row.away_team_score()),
            home_team_score: coerce::count(&row.home_team_score()),
        });
    }

    log::debug!("Parsed {} scheduled games", games.len());
    Ok(games)
}

#[cfg(test)]
mod tests {
    use chrono::Timelike as _;
    use chrono_tz::UTC;
    use courtside_stats_models::Team;

    use super::*;
    use crate::html::test_support::document;

    #[test]
    fn parses_single_letter_suffix() {
        let start = parse_start_time("Tue, Oct 22, 2019", "8:00p", New_York).unwrap();
        assert_eq!(start.hour(), 20);
        assert_eq!(start.offset().local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn parses_spaced_two_letter_suffix() {
        let start = parse_start_time("Tue, Oct 31, 2017", "7:30 pm", New_York).unwrap();
        assert_eq!((start.hour(), start.minute()), (19, 30));
    }

    #[test]
    fn converts_to_requested_zone() {
        let start = parse_start_time("Wed, Jan 15, 2020", "7:00p", UTC).unwrap();
        assert_eq!(start.hour(), 0);
        assert_eq!(start.offset().local_minus_utc(), 0);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2020, 1, 16).unwrap());
    }

    #[test]
    fn empty_time_uses_midnight_eastern() {
        let start = parse_start_time("Fri, Apr 10, 2020", "  ", New_York).unwrap();
        assert_eq!(start.hour(), 0);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2020, 4, 10).unwrap());
    }

    #[test]
    fn rejects_unknown_layouts() {
        assert!(parse_start_time("2019-10-22", "8:00p", New_York).is_err());
        assert!(parse_start_time("Tue, Oct 22, 2019", "eight", New_York).is_err());
    }

    #[test]
    fn parses_played_and_unplayed_games() {
        let html = document(
            r#"<table id="schedule"><tbody>
                <tr><th data-stat="date_game">Tue, Oct 22, 2019</th>
                    <td data-stat="game_start_time">8:00p</td>
                    <td data-stat="visitor_team_name">New Orleans Pelicans</td>
                    <td data-stat="visitor_pts">122</td>
                    <td data-stat="home_team_name">Toronto Raptors</td>
                    <td data-stat="home_pts">130</td></tr>
                <tr class="thead"><th colspan="10">Playoffs</th></tr>
                <tr><th data-stat="date_game">Wed, Apr 15, 2020</th>
                    <td data-stat="game_start_time"></td>
                    <td data-stat="visitor_team_name">Boston Celtics</td>
                    <td data-stat="visitor_pts"></td>
                    <td data-stat="home_team_name">Milwaukee Bucks</td>
                    <td data-stat="home_pts"></td></tr>
            </tbody></table>"#,
        );
        let games = parse_schedule(&html, New_York).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].away_team, Team::NewOrleansPelicans);
        assert_eq!(games[0].home_team_score, Some(130));
        assert_eq!(games[1].home_team, Team::MilwaukeeBucks);
        assert_eq!(games[1].away_team_score, None);
    }
}
