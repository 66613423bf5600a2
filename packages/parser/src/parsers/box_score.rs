//! Single-game box scores.

use courtside_stats_models::{GameBoxScore, Location, PlayerBoxScore, StatLine, Team, TeamBoxScore};
use scraper::Html;

use super::stat_line;
use crate::{
    ParseError,
    abbreviations::team_from_abbreviation,
    coerce,
    html::{
        PlayerIdentity,
        box_score::{BoxScorePage, BoxScoreTable},
    },
    time::clock_to_seconds,
};

/// Parses the basic box score tables of a game page.
///
/// The page must carry exactly two basic tables, away team first. Players
/// who did not play are kept with `active: false` and no statistics.
///
/// # Errors
///
/// * [`ParseError::MissingTable`] unless exactly two basic tables exist.
/// * [`ParseError::UnknownAbbreviation`] for an unrecognized team code.
/// * [`ParseError::MalformedClock`] for an unreadable minutes cell.
pub fn parse_box_score(document: &Html) -> Result<GameBoxScore, ParseError> {
    let tables = BoxScorePage::new(document).basic_tables();
    let [away, home] = tables.as_slice() else {
        return Err(ParseError::MissingTable(format!(
            "expected 2 basic box score tables, found {}",
            tables.len()
        )));
    };

    let away_team = table_team(away)?;
    let home_team = table_team(home)?;

    let mut box_score = GameBoxScore::default();
    for (table, team, opponent, location) in [
        (away, away_team, home_team, Location::Away),
        (home, home_team, away_team, Location::Home),
    ] {
        for row in table.player_rows() {
            if !row.0.is_data() {
                continue;
            }
            let active = row.is_active();
            let (seconds_played, stats, plus_minus) = if active {
                (
                    Some(clock_to_seconds(&row.minutes_played())?),
                    stat_line(&row),
                    coerce::signed(&row.plus_minus()),
                )
            } else {
                (None, StatLine::default(), None)
            };
            box_score.players.push(PlayerBoxScore {
                slug: row.slug(),
                name: row.player_name(),
                team,
                opponent,
                location,
                active,
                seconds_played,
                stats,
                plus_minus,
            });
        }

        if let Some(totals) = table.team_totals_row() {
            box_score.teams.push(TeamBoxScore {
                team,
                opponent,
                location,
                minutes_played: team_minutes(&totals.minutes_played()),
                stats: stat_line(&totals),
            });
        }
    }

    log::debug!(
        "Parsed box score {away_team} at {home_team}: {} players",
        box_score.players.len()
    );
    Ok(box_score)
}

fn table_team(table: &BoxScoreTable<'_>) -> Result<Team, ParseError> {
    let code = table
        .team_code()
        .ok_or_else(|| ParseError::MissingCell("box score table id".to_owned()))?;
    team_from_abbreviation(code)
}

/// Team totals print whole minutes (`"240"`), occasionally as a clock.
fn team_minutes(cell: &str) -> Option<u32> {
    coerce::count(cell).or_else(|| {
        coerce::non_empty(cell)
            .and_then(|clock| clock_to_seconds(clock).ok())
            .map(|seconds| seconds / 60)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::test_support::document;

    fn table(code: &str, players: &str, minutes: &str) -> String {
        format!(
            r#"<table id="box-{code}-game-basic">
                 <thead><tr><th>Starters</th></tr></thead>
                 <tbody>{players}</tbody>
                 <tfoot><tr><th data-stat="player">Team Totals</th>
                   <td data-stat="mp">{minutes}</td><td data-stat="pts">108</td></tr></tfoot>
               </table>"#
        )
    }

    fn page() -> Html {
        let away = table(
            "MIL",
            r#"<tr><th data-stat="player" data-append-csv="antetgi01"><a>Giannis Antetokounmpo</a></th>
                   <td data-stat="mp">34:28</td><td data-stat="pts">30</td>
                   <td data-stat="plus_minus">+12</td></tr>
               <tr class="thead"><th>Reserves</th></tr>
               <tr><th data-stat="player" data-append-csv="connapa01"><a>Pat Connaughton</a></th>
                   <td data-stat="reason" colspan="19">Did Not Play</td></tr>"#,
            "240",
        );
        let home = table(
            "BOS",
            r#"<tr><th data-stat="player" data-append-csv="tatumja01"><a>Jayson Tatum</a></th>
                   <td data-stat="mp">38:02</td><td data-stat="pts">28</td>
                   <td data-stat="plus_minus">-12</td></tr>"#,
            "265",
        );
        document(&format!("{away}{home}"))
    }

    #[test]
    fn assigns_away_then_home() {
        let html = page();
        let box_score = parse_box_score(&html).unwrap();
        assert_eq!(box_score.players.len(), 3);
        let giannis = &box_score.players[0];
        assert_eq!(giannis.team, Team::MilwaukeeBucks);
        assert_eq!(giannis.opponent, Team::BostonCeltics);
        assert_eq!(giannis.location, Location::Away);
        assert_eq!(giannis.seconds_played, Some(2068));
        assert_eq!(giannis.plus_minus, Some(12));
        let tatum = &box_score.players[2];
        assert_eq!(tatum.location, Location::Home);
        assert_eq!(tatum.plus_minus, Some(-12));
    }

    #[test]
    fn did_not_play_rows_are_inactive_without_stats() {
        let html = page();
        let box_score = parse_box_score(&html).unwrap();
        let reserve = &box_score.players[1];
        assert!(!reserve.active);
        assert_eq!(reserve.seconds_played, None);
        assert_eq!(reserve.stats, StatLine::default());
        assert_eq!(reserve.slug.as_deref(), Some("connapa01"));
    }

    #[test]
    fn reads_team_totals_from_footer() {
        let html = page();
        let box_score = parse_box_score(&html).unwrap();
        assert_eq!(box_score.teams.len(), 2);
        assert_eq!(box_score.teams[0].minutes_played, Some(240));
        assert_eq!(box_score.teams[1].minutes_played, Some(265));
        assert_eq!(box_score.teams[1].stats.points, Some(108));
    }

    #[test]
    fn requires_exactly_two_tables() {
        let html = document(&table("MIL", "", "240"));
        assert!(matches!(
            parse_box_score(&html),
            Err(ParseError::MissingTable(_))
        ));
    }
}
