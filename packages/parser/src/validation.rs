//! Structural checks for freshly fetched pages.
//!
//! A fetched page is only worth persisting if the extraction layer will be
//! able to read it later. [`validate_fixture`] runs the same table lookups
//! the parsers use and reports what is missing, without coercing any cell.

use scraper::Html;

use crate::html::{
    RowKind, TableView,
    box_score::BoxScorePage,
    game_log::GameLogTable,
    history::HistoryTable,
    play_by_play::PlayByPlayPage,
    roster::RosterTable,
    schedule::SchedulePage,
    search::SearchPage,
    season_totals::{AdvancedTotalsTable, SeasonTotalsTable},
    standings::StandingsPage,
};

/// Validator ids understood by [`validate_fixture`], one per page kind.
pub const VALIDATOR_IDS: &[&str] = &[
    "box_score",
    "season_totals",
    "advanced_totals",
    "game_log",
    "schedule",
    "play_by_play",
    "standings",
    "search",
    "roster",
    "executive",
    "referee",
];

/// Checks that `raw` looks like a page of kind `validator_id`.
///
/// Returns one message per structural problem; an empty list means the
/// page is usable. An unknown validator id is itself a problem.
#[must_use]
pub fn validate_fixture(raw: &[u8], validator_id: &str) -> Vec<String> {
    let Ok(markup) = std::str::from_utf8(raw) else {
        return vec!["page is not valid UTF-8".to_owned()];
    };
    if markup.trim().is_empty() {
        return vec!["page is empty".to_owned()];
    }

    let document = Html::parse_document(markup);
    let mut problems = Vec::new();
    match validator_id {
        "box_score" => {
            let tables = BoxScorePage::new(&document).basic_tables();
            if tables.len() == 2 {
                for table in &tables {
                    require_data_rows(&mut problems, table, "box score");
                }
            } else {
                problems.push(format!(
                    "expected 2 basic box score tables, found {}",
                    tables.len()
                ));
            }
        }
        "season_totals" => match SeasonTotalsTable::find(&document) {
            Some(table) => require_data_rows(&mut problems, &table, "season totals"),
            None => problems.push("missing season totals table".to_owned()),
        },
        "advanced_totals" => match AdvancedTotalsTable::find(&document) {
            Some(table) => require_data_rows(&mut problems, &table, "advanced totals"),
            None => problems.push("missing advanced totals table".to_owned()),
        },
        "game_log" => match GameLogTable::find(&document) {
            Some(table) => require_data_rows(&mut problems, &table, "game log"),
            None => problems.push("missing game log table".to_owned()),
        },
        "schedule" => match SchedulePage::new(&document).table() {
            Some(table) => require_data_rows(&mut problems, &table, "schedule"),
            None => problems.push("missing schedule table".to_owned()),
        },
        "play_by_play" => {
            let page = PlayByPlayPage::new(&document);
            if page.home_team_name().is_none() {
                problems.push("scorebox does not name both teams".to_owned());
            }
            match page.table() {
                Some(table) => {
                    let rows = table.event_rows();
                    if !rows.iter().any(|row| row.kind() == RowKind::PeriodMarker) {
                        problems.push("play-by-play table has no period markers".to_owned());
                    }
                    if !rows.iter().any(|row| row.kind() == RowKind::Data) {
                        problems.push("play-by-play table has no events".to_owned());
                    }
                }
                None => problems.push("missing play-by-play table".to_owned()),
            }
        }
        "standings" => {
            let tables = StandingsPage::new(&document).tables();
            if tables.is_empty() {
                problems.push("missing standings tables".to_owned());
            }
            for table in &tables {
                require_data_rows(&mut problems, table, "standings");
            }
        }
        "search" => {
            if SearchPage::new(&document).player_results().is_empty() {
                problems.push("search page has no player results".to_owned());
            }
        }
        "roster" => match RosterTable::find(&document) {
            Some(table) => require_data_rows(&mut problems, &table, "roster"),
            None => problems.push("missing roster table".to_owned()),
        },
        "executive" => match HistoryTable::find_executive(&document) {
            Some(table) => require_data_rows(&mut problems, &table, "executive"),
            None => problems.push("missing executive table".to_owned()),
        },
        "referee" => match HistoryTable::find_referee(&document) {
            Some(table) => require_data_rows(&mut problems, &table, "referee"),
            None => problems.push("missing referee table".to_owned()),
        },
        unknown => problems.push(format!("unknown validator id {unknown:?}")),
    }

    problems
}

fn require_data_rows<'a>(problems: &mut Vec<String>, table: &impl TableView<'a>, label: &str) {
    if !table.rows().iter().any(|row| row.is_data()) {
        let id = table.id().unwrap_or("?");
        problems.push(format!("{label} table {id} has no data rows"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEASON_TOTALS: &str = r#"<html><body><table id="totals_stats"><tbody>
        <tr><td data-stat="player">A Player</td><td data-stat="team_id">BOS</td></tr>
        </tbody></table></body></html>"#;

    #[test]
    fn accepts_well_formed_page() {
        assert!(validate_fixture(SEASON_TOTALS.as_bytes(), "season_totals").is_empty());
    }

    #[test]
    fn reports_missing_table() {
        let problems = validate_fixture(SEASON_TOTALS.as_bytes(), "box_score");
        assert_eq!(problems, vec!["expected 2 basic box score tables, found 0"]);
    }

    #[test]
    fn reports_table_without_data_rows() {
        let markup = r#"<table id="roster"><tbody><tr class="thead"><th>No.</th></tr></tbody></table>"#;
        let problems = validate_fixture(markup.as_bytes(), "roster");
        assert_eq!(problems, vec!["roster table roster has no data rows"]);
    }

    #[test]
    fn rejects_non_utf8_and_empty_pages() {
        assert_eq!(validate_fixture(&[0xff, 0xfe], "roster").len(), 1);
        assert_eq!(validate_fixture(b"   ", "roster"), vec!["page is empty"]);
    }

    #[test]
    fn unknown_validator_is_a_problem() {
        let problems = validate_fixture(SEASON_TOTALS.as_bytes(), "nope");
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("nope"));
    }

    #[test]
    fn every_listed_id_is_known() {
        for id in VALIDATOR_IDS {
            let problems = validate_fixture(b"<html></html>", id);
            assert!(
                problems.iter().all(|problem| !problem.contains("unknown validator")),
                "{id} is listed but not handled"
            );
        }
    }
}
