//! Team season rosters.

use chrono::NaiveDate;
use courtside_stats_models::RosterEntry;
use scraper::Html;

use super::missing_table;
use crate::{
    ParseError,
    abbreviations::positions_from_abbreviations,
    coerce,
    html::{
        PlayerIdentity,
        roster::{ROSTER_TABLE_IDS, RosterTable},
    },
};

const ROOKIE_MARKER: &str = "R";

/// Parses every player of a team roster page.
///
/// # Errors
///
/// * [`ParseError::MissingTable`] if the page has no roster table.
/// * [`ParseError::UnknownAbbreviation`] for an unrecognized position.
pub fn parse_roster(document: &Html) -> Result<Vec<RosterEntry>, ParseError> {
    let table = RosterTable::find(document).ok_or_else(|| missing_table(ROSTER_TABLE_IDS))?;

    let mut entries = Vec::new();
    for row in table.player_rows() {
        if !row.0.is_data() {
            continue;
        }
        let experience = row.years_of_experience();
        entries.push(RosterEntry {
            slug: row.slug(),
            name: row.player_name(),
            jersey_number: coerce::non_empty(&row.jersey_number()).map(str::to_owned),
            positions: positions_from_abbreviations(&row.positions())?,
            height_inches: coerce::height_inches(&row.height()),
            weight_pounds: coerce::count(&row.weight()),
            birth_date: birth_date(&row.birth_date()),
            birth_country: coerce::non_empty(&row.birth_country()).map(str::to_lowercase),
            years_of_experience: if experience.trim() == ROOKIE_MARKER {
                Some(0)
            } else {
                coerce::count(&experience)
            },
            colleges: row
                .colleges()
                .split(',')
                .map(str::trim)
                .filter(|college| !college.is_empty())
                .map(str::to_owned)
                .collect(),
        });
    }

    log::debug!("Parsed {} roster entries", entries.len());
    Ok(entries)
}

fn birth_date(cell: &str) -> Option<NaiveDate> {
    let value = coerce::non_empty(cell)?;
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%B %d, %Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use courtside_stats_models::Position;

    use super::*;
    use crate::html::test_support::document;

    #[test]
    fn parses_roster_rows() {
        let html = document(
            r#"<table id="roster"><tbody>
                <tr><th data-stat="number">0</th>
                    <td data-stat="player" data-append-csv="tatumja01">Jayson Tatum</td>
                    <td data-stat="pos">SF</td><td data-stat="height">6-8</td>
                    <td data-stat="weight">208</td>
                    <td data-stat="birth_date" csk="19980303">March 3, 1998</td>
                    <td data-stat="birth_country">US</td>
                    <td data-stat="years_experience">2</td>
                    <td data-stat="college">Duke</td></tr>
                <tr><th data-stat="number"></th>
                    <td data-stat="player">Two Schools</td>
                    <td data-stat="pos">G-F</td><td data-stat="height"></td>
                    <td data-stat="weight"></td>
                    <td data-stat="birth_date">June 1, 2000</td>
                    <td data-stat="birth_country"></td>
                    <td data-stat="years_experience">R</td>
                    <td data-stat="college">Kentucky, UCLA</td></tr>
            </tbody></table>"#,
        );
        let roster = parse_roster(&html).unwrap();
        assert_eq!(roster.len(), 2);

        let tatum = &roster[0];
        assert_eq!(tatum.slug.as_deref(), Some("tatumja01"));
        assert_eq!(tatum.jersey_number.as_deref(), Some("0"));
        assert_eq!(tatum.height_inches, Some(80));
        assert_eq!(tatum.birth_date, NaiveDate::from_ymd_opt(1998, 3, 3));
        assert_eq!(tatum.birth_country.as_deref(), Some("us"));
        assert_eq!(tatum.years_of_experience, Some(2));

        let rookie = &roster[1];
        assert_eq!(rookie.slug, None);
        assert_eq!(rookie.jersey_number, None);
        assert_eq!(rookie.positions, vec![Position::Guard, Position::Forward]);
        assert_eq!(rookie.birth_date, NaiveDate::from_ymd_opt(2000, 6, 1));
        assert_eq!(rookie.years_of_experience, Some(0));
        assert_eq!(rookie.colleges, vec!["Kentucky", "UCLA"]);
    }
}
