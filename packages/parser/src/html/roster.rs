//! Team season roster table.

use scraper::{ElementRef, Html};

use super::{PlayerIdentity, RowView, RowWrapper, TableView, find_table};

pub const ROSTER_TABLE_IDS: &[&str] = &["roster"];

#[derive(Debug, Clone, Copy)]
pub struct RosterTable<'a> {
    element: ElementRef<'a>,
}

impl<'a> RosterTable<'a> {
    #[must_use]
    pub fn find(document: &'a Html) -> Option<Self> {
        find_table(document, ROSTER_TABLE_IDS).map(|element| Self { element })
    }

    #[must_use]
    pub fn player_rows(&self) -> Vec<RosterRow<'a>> {
        self.rows().into_iter().map(RosterRow).collect()
    }
}

impl<'a> TableView<'a> for RosterTable<'a> {
    fn element(&self) -> ElementRef<'a> {
        self.element
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RosterRow<'a>(pub RowView<'a>);

impl RosterRow<'_> {
    #[must_use]
    pub fn jersey_number(&self) -> String {
        self.0.stat("number")
    }

    #[must_use]
    pub fn positions(&self) -> String {
        self.0.stat("pos")
    }

    /// e.g. `"6-9"`.
    #[must_use]
    pub fn height(&self) -> String {
        self.0.stat("height")
    }

    #[must_use]
    pub fn weight(&self) -> String {
        self.0.stat("weight")
    }

    /// The sortable `YYYYMMDD` form if present, else the printed date.
    #[must_use]
    pub fn birth_date(&self) -> String {
        self.0
            .stat_attr("birth_date", "csk")
            .map(str::trim)
            .filter(|csk| !csk.is_empty())
            .map_or_else(|| self.0.stat("birth_date"), str::to_owned)
    }

    #[must_use]
    pub fn birth_country(&self) -> String {
        self.0.stat_any(&["flag", "birth_country"])
    }

    /// `"R"` for rookies.
    #[must_use]
    pub fn years_of_experience(&self) -> String {
        self.0.stat("years_experience")
    }

    #[must_use]
    pub fn colleges(&self) -> String {
        self.0.stat("college")
    }
}

impl<'a> RowWrapper<'a> for RosterRow<'a> {
    fn row(&self) -> RowView<'a> {
        self.0
    }
}

impl<'a> PlayerIdentity<'a> for RosterRow<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::test_support::document;

    #[test]
    fn prefers_sortable_birth_date() {
        let html = document(
            r#"<table id="roster"><tbody><tr>
                <th data-stat="number">0</th>
                <td data-stat="player" data-append-csv="tatumja01"><a>Jayson Tatum</a></td>
                <td data-stat="pos">SF</td>
                <td data-stat="height">6-8</td>
                <td data-stat="weight">208</td>
                <td data-stat="birth_date" csk="19980303">March 3, 1998</td>
                <td data-stat="birth_country">us</td>
                <td data-stat="years_experience">R</td>
                <td data-stat="college"><a>Duke</a></td>
            </tr></tbody></table>"#,
        );
        let row = RosterTable::find(&html).unwrap().player_rows()[0];
        assert_eq!(row.slug().as_deref(), Some("tatumja01"));
        assert_eq!(row.jersey_number(), "0");
        assert_eq!(row.birth_date(), "19980303");
        assert_eq!(row.birth_country(), "us");
        assert_eq!(row.years_of_experience(), "R");
        assert_eq!(row.colleges(), "Duke");
    }
}
