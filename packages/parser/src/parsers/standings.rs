//! Conference and division standings.

use courtside_stats_models::{Division, StandingsRecord};
use scraper::Html;

use super::missing_table;
use crate::{
    ParseError,
    abbreviations::{conference_from_abbreviation, division_from_name, team_from_name},
    coerce,
    html::standings::{CONFERENCE_STANDINGS_TABLE_IDS, DIVISION_STANDINGS_TABLE_IDS, StandingsPage},
};

/// Parses every team row of a standings page.
///
/// Division tables are preferred; each team inherits the division of the
/// nearest header row above it. Seasons that only publish conference
/// tables produce records with `division: None`.
///
/// # Errors
///
/// * [`ParseError::MissingTable`] if the page has neither table layout.
/// * [`ParseError::UnknownAbbreviation`] for an unknown conference suffix
///   or team name.
pub fn parse_standings(document: &Html) -> Result<Vec<StandingsRecord>, ParseError> {
    let tables = StandingsPage::new(document).tables();
    if tables.is_empty() {
        let ids = [DIVISION_STANDINGS_TABLE_IDS, CONFERENCE_STANDINGS_TABLE_IDS].concat();
        return Err(missing_table(&ids));
    }

    let mut records = Vec::new();
    for table in tables {
        let code = table
            .conference_code()
            .ok_or_else(|| ParseError::MissingCell("standings table id".to_owned()))?;
        let conference = conference_from_abbreviation(code)?;

        let mut division: Option<Division> = None;
        for row in table.standings_rows() {
            if let Some(header) = row.division_header() {
                division = division_from_name(&header);
                continue;
            }
            if !row.0.is_data() {
                continue;
            }
            records.push(StandingsRecord {
                team: team_from_name(&row.team_name())?,
                conference,
                division,
                wins: coerce::count(&row.wins()),
                losses: coerce::count(&row.losses()),
            });
        }
    }

    log::debug!("Parsed {} standings rows", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use courtside_stats_models::{Conference, Team};

    use super::*;
    use crate::html::test_support::document;

    #[test]
    fn assigns_divisions_from_header_rows() {
        let html = document(
            r#"<table id="divs_standings_E"><tbody>
                <tr class="thead"><th colspan="8">Atlantic Division</th></tr>
                <tr><th data-stat="team_name">Toronto Raptors*</th>
                    <td data-stat="wins">53</td><td data-stat="losses">19</td></tr>
                <tr class="thead"><th colspan="8">Central Division</th></tr>
                <tr><th data-stat="team_name">Milwaukee Bucks*</th>
                    <td data-stat="wins">56</td><td data-stat="losses">17</td></tr>
            </tbody></table>
            <table id="divs_standings_W"><tbody>
                <tr class="thead"><th colspan="8">Pacific Division</th></tr>
                <tr><th data-stat="team_name">Los Angeles Lakers*</th>
                    <td data-stat="wins">52</td><td data-stat="losses">19</td></tr>
            </tbody></table>"#,
        );
        let records = parse_standings(&html).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].team, Team::TorontoRaptors);
        assert_eq!(records[0].division, Some(Division::Atlantic));
        assert_eq!(records[1].division, Some(Division::Central));
        assert_eq!(records[1].wins, Some(56));
        assert_eq!(records[2].conference, Conference::Western);
        assert_eq!(records[2].division, Some(Division::Pacific));
    }

    #[test]
    fn conference_tables_have_no_division() {
        let html = document(
            r#"<table id="confs_standings_E"><tbody>
                <tr><th data-stat="team_name">Boston Celtics (2)</th>
                    <td data-stat="wins">48</td><td data-stat="losses">24</td></tr>
            </tbody></table>"#,
        );
        let records = parse_standings(&html).unwrap();
        assert_eq!(records[0].team, Team::BostonCeltics);
        assert_eq!(records[0].conference, Conference::Eastern);
        assert_eq!(records[0].division, None);
    }

    #[test]
    fn missing_tables_is_an_error() {
        let html = document("<p></p>");
        assert!(matches!(
            parse_standings(&html),
            Err(ParseError::MissingTable(_))
        ));
    }
}
