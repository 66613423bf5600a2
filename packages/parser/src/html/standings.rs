//! Season standings page.
//!
//! Divisional standings (`divs_standings_E`, `divs_standings_W`) interleave
//! division header rows with team rows. Seasons without divisions only
//! publish the conference tables (`confs_standings_E`, ...).

use scraper::{ElementRef, Html};

use super::{RowView, RowWrapper, TableView, find_table, selector, text_of};

pub const DIVISION_STANDINGS_TABLE_IDS: &[&str] = &["divs_standings_E", "divs_standings_W"];
pub const CONFERENCE_STANDINGS_TABLE_IDS: &[&str] = &["confs_standings_E", "confs_standings_W"];

#[derive(Debug, Clone, Copy)]
pub struct StandingsPage<'a> {
    document: &'a Html,
}

impl<'a> StandingsPage<'a> {
    #[must_use]
    pub const fn new(document: &'a Html) -> Self {
        Self { document }
    }

    /// Division tables if the season has them, else conference tables.
    #[must_use]
    pub fn tables(&self) -> Vec<StandingsTable<'a>> {
        let divisions = Self::collect(self.document, DIVISION_STANDINGS_TABLE_IDS);
        if divisions.is_empty() {
            Self::collect(self.document, CONFERENCE_STANDINGS_TABLE_IDS)
        } else {
            divisions
        }
    }

    fn collect(document: &'a Html, ids: &[&str]) -> Vec<StandingsTable<'a>> {
        ids.iter()
            .filter_map(|id| find_table(document, &[id]))
            .map(|element| StandingsTable { element })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StandingsTable<'a> {
    element: ElementRef<'a>,
}

impl<'a> StandingsTable<'a> {
    /// The conference abbreviation (`E` or `W`) from the table id suffix.
    #[must_use]
    pub fn conference_code(&self) -> Option<&'a str> {
        self.id()?.rsplit('_').next()
    }

    #[must_use]
    pub fn standings_rows(&self) -> Vec<StandingsRow<'a>> {
        self.rows().into_iter().map(StandingsRow).collect()
    }
}

impl<'a> TableView<'a> for StandingsTable<'a> {
    fn element(&self) -> ElementRef<'a> {
        self.element
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StandingsRow<'a>(pub RowView<'a>);

impl StandingsRow<'_> {
    /// The division named by a header row, e.g. `"Atlantic Division"`.
    #[must_use]
    pub fn division_header(&self) -> Option<String> {
        if !self.0.has_class("thead") {
            return None;
        }
        let header = selector("th, td");
        self.0
            .element()
            .select(&header)
            .next()
            .map(text_of)
            .filter(|text| text.ends_with("Division"))
    }

    #[must_use]
    pub fn team_name(&self) -> String {
        self.0.stat("team_name")
    }

    #[must_use]
    pub fn wins(&self) -> String {
        self.0.stat("wins")
    }

    #[must_use]
    pub fn losses(&self) -> String {
        self.0.stat("losses")
    }
}

impl<'a> RowWrapper<'a> for StandingsRow<'a> {
    fn row(&self) -> RowView<'a> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::RowKind;
    use crate::html::test_support::document;

    #[test]
    fn reads_division_headers_and_team_rows() {
        let html = document(
            r#"<table id="divs_standings_E"><tbody>
                <tr class="thead"><th colspan="8">Atlantic Division</th></tr>
                <tr><th data-stat="team_name"><a>Toronto Raptors</a>*</th>
                    <td data-stat="wins">53</td><td data-stat="losses">19</td></tr>
            </tbody></table>
            <table id="divs_standings_W"><tbody></tbody></table>
            <table id="confs_standings_E"><tbody></tbody></table>"#,
        );
        let tables = StandingsPage::new(&html).tables();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].conference_code(), Some("E"));
        let rows = tables[0].standings_rows();
        assert_eq!(rows[0].division_header().as_deref(), Some("Atlantic Division"));
        assert_eq!(rows[0].0.kind(), RowKind::Header);
        assert_eq!(rows[1].division_header(), None);
        assert_eq!(rows[1].team_name(), "Toronto Raptors*");
        assert_eq!(rows[1].wins(), "53");
    }

    #[test]
    fn falls_back_to_conference_tables() {
        let html = document(
            r#"<table id="confs_standings_W"><tbody>
                <tr><th data-stat="team_name">Los Angeles Lakers (1)</th>
                    <td data-stat="wins">52</td><td data-stat="losses">19</td></tr>
            </tbody></table>"#,
        );
        let tables = StandingsPage::new(&html).tables();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].conference_code(), Some("W"));
    }
}
