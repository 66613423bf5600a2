//! Executive and referee career history tables.

use scraper::{ElementRef, Html};

use super::{RowView, RowWrapper, TableView, TeamIdentity, find_table};

pub const EXECUTIVE_TABLE_IDS: &[&str] = &["exec_stats", "executive_stats", "exec"];
pub const REFEREE_TABLE_IDS: &[&str] = &["referee_stats", "ref_stats", "refs"];

#[derive(Debug, Clone, Copy)]
pub struct HistoryTable<'a> {
    element: ElementRef<'a>,
}

impl<'a> HistoryTable<'a> {
    #[must_use]
    pub fn find_executive(document: &'a Html) -> Option<Self> {
        find_table(document, EXECUTIVE_TABLE_IDS).map(|element| Self { element })
    }

    #[must_use]
    pub fn find_referee(document: &'a Html) -> Option<Self> {
        find_table(document, REFEREE_TABLE_IDS).map(|element| Self { element })
    }

    #[must_use]
    pub fn season_rows(&self) -> Vec<HistoryRow<'a>> {
        self.rows().into_iter().map(HistoryRow).collect()
    }
}

impl<'a> TableView<'a> for HistoryTable<'a> {
    fn element(&self) -> ElementRef<'a> {
        self.element
    }
}

/// One season of an executive's or referee's career.
#[derive(Debug, Clone, Copy)]
pub struct HistoryRow<'a>(pub RowView<'a>);

impl HistoryRow<'_> {
    /// e.g. `"2019-20"`.
    #[must_use]
    pub fn season(&self) -> String {
        self.0.stat("season")
    }

    #[must_use]
    pub fn league(&self) -> String {
        self.0.stat("lg_id")
    }

    #[must_use]
    pub fn role(&self) -> String {
        self.0.stat_any(&["role", "exec_role"])
    }

    #[must_use]
    pub fn wins(&self) -> String {
        self.0.stat("wins")
    }

    #[must_use]
    pub fn losses(&self) -> String {
        self.0.stat("losses")
    }

    #[must_use]
    pub fn regular_season_games(&self) -> String {
        self.0.stat("g")
    }

    #[must_use]
    pub fn playoff_games(&self) -> String {
        self.0.stat("g_playoffs")
    }
}

impl<'a> RowWrapper<'a> for HistoryRow<'a> {
    fn row(&self) -> RowView<'a> {
        self.0
    }
}

impl<'a> TeamIdentity<'a> for HistoryRow<'a> {}
