//! Single-game box score page.
//!
//! The page carries one "basic" table per team, id
//! `box-<CODE>-game-basic`, away team first. Team totals live in the
//! table footer.

use scraper::{ElementRef, Html};

use super::{CountingStats, PlayerIdentity, RowView, RowWrapper, TableView, selector};

const BASIC_TABLE_PREFIX: &str = "box-";
const BASIC_TABLE_SUFFIX: &str = "-game-basic";

#[derive(Debug, Clone, Copy)]
pub struct BoxScorePage<'a> {
    document: &'a Html,
}

impl<'a> BoxScorePage<'a> {
    #[must_use]
    pub const fn new(document: &'a Html) -> Self {
        Self { document }
    }

    /// Basic box score tables in page order (away, then home).
    #[must_use]
    pub fn basic_tables(&self) -> Vec<BoxScoreTable<'a>> {
        let tables = selector(r#"table[id^="box-"][id$="-game-basic"]"#);
        self.document
            .select(&tables)
            .map(|element| BoxScoreTable { element })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BoxScoreTable<'a> {
    element: ElementRef<'a>,
}

impl<'a> BoxScoreTable<'a> {
    /// The team code embedded in the table id (`box-BOS-game-basic` →
    /// `BOS`).
    #[must_use]
    pub fn team_code(&self) -> Option<&'a str> {
        self.id()?
            .strip_prefix(BASIC_TABLE_PREFIX)?
            .strip_suffix(BASIC_TABLE_SUFFIX)
    }

    #[must_use]
    pub fn player_rows(&self) -> Vec<BoxScoreRow<'a>> {
        self.rows().into_iter().map(BoxScoreRow).collect()
    }

    /// The "Team Totals" footer row.
    #[must_use]
    pub fn team_totals_row(&self) -> Option<BoxScoreRow<'a>> {
        self.footer_rows().into_iter().next().map(BoxScoreRow)
    }
}

impl<'a> TableView<'a> for BoxScoreTable<'a> {
    fn element(&self) -> ElementRef<'a> {
        self.element
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BoxScoreRow<'a>(pub RowView<'a>);

impl BoxScoreRow<'_> {
    #[must_use]
    pub fn minutes_played(&self) -> String {
        self.0.stat("mp")
    }

    #[must_use]
    pub fn plus_minus(&self) -> String {
        self.0.stat("plus_minus")
    }

    /// Text of the "Did Not Play" style reason cell, if the row has one.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.0.cell("reason").map(super::text_of)
    }

    /// A player is active unless the row replaces its stats with a reason
    /// cell.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.0.cell("reason").is_none()
    }
}

impl<'a> RowWrapper<'a> for BoxScoreRow<'a> {
    fn row(&self) -> RowView<'a> {
        self.0
    }
}

impl<'a> PlayerIdentity<'a> for BoxScoreRow<'a> {}
impl<'a> CountingStats<'a> for BoxScoreRow<'a> {}
