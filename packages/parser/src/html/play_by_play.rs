//! Play-by-play page.
//!
//! Unlike the other tables, play-by-play cells carry no `data-stat`
//! attributes, so rows are read by position:
//!
//! | index | content                 |
//! |-------|-------------------------|
//! | 0     | time remaining          |
//! | 1     | away team description   |
//! | 3     | `"<away>-<home>"` score |
//! | 5     | home team description   |

use scraper::{ElementRef, Html};

use super::{RowKind, RowView, TableView, find_table, selector, text_of};

pub const PLAY_BY_PLAY_TABLE_IDS: &[&str] = &["pbp"];

/// Cells in a full event row.
const EVENT_CELL_COUNT: usize = 6;

const TIMESTAMP_CELL: usize = 0;
const AWAY_DESCRIPTION_CELL: usize = 1;
const SCORES_CELL: usize = 3;
const HOME_DESCRIPTION_CELL: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct PlayByPlayPage<'a> {
    document: &'a Html,
}

impl<'a> PlayByPlayPage<'a> {
    #[must_use]
    pub const fn new(document: &'a Html) -> Self {
        Self { document }
    }

    #[must_use]
    pub fn table(&self) -> Option<PlayByPlayTable<'a>> {
        find_table(self.document, PLAY_BY_PLAY_TABLE_IDS).map(|element| PlayByPlayTable { element })
    }

    fn scorebox_team_names(&self) -> Vec<String> {
        let links = selector(".scorebox strong a");
        self.document.select(&links).map(text_of).collect()
    }

    /// Full name of the away team as printed in the scorebox.
    #[must_use]
    pub fn away_team_name(&self) -> Option<String> {
        self.scorebox_team_names().into_iter().next()
    }

    /// Full name of the home team as printed in the scorebox.
    #[must_use]
    pub fn home_team_name(&self) -> Option<String> {
        self.scorebox_team_names().into_iter().nth(1)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlayByPlayTable<'a> {
    element: ElementRef<'a>,
}

impl<'a> PlayByPlayTable<'a> {
    /// Every row of the table in document order.
    ///
    /// Older pages put all rows directly under `<table>` (the HTML parser
    /// then synthesizes a single `<tbody>`), so this walks every `<tr>`
    /// instead of only `tbody > tr`.
    #[must_use]
    pub fn event_rows(&self) -> Vec<PlayByPlayRow<'a>> {
        let rows = selector("tr");
        self.element
            .select(&rows)
            .map(|element| PlayByPlayRow(RowView::new(element)))
            .collect()
    }
}

impl<'a> TableView<'a> for PlayByPlayTable<'a> {
    fn element(&self) -> ElementRef<'a> {
        self.element
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlayByPlayRow<'a>(pub RowView<'a>);

impl<'a> PlayByPlayRow<'a> {
    fn data_cell(&self, index: usize) -> Option<ElementRef<'a>> {
        self.0.data_cells().into_iter().nth(index)
    }

    fn data_cell_text(&self, index: usize) -> String {
        self.data_cell(index).map(text_of).unwrap_or_default()
    }

    /// Classifies the row positionally.
    ///
    /// Period headers ("1st Q", "2nd OT") span all six columns with a
    /// single `<th>`. Start/end-of-period notes and jump balls have fewer
    /// than six `<td>` cells.
    #[must_use]
    pub fn kind(&self) -> RowKind {
        if self.is_period_header() {
            return RowKind::PeriodMarker;
        }
        let cells = self.0.data_cells();
        if self.0.has_class("thead") || cells.is_empty() {
            return RowKind::Header;
        }
        if cells.len() < EVENT_CELL_COUNT {
            return RowKind::Filler;
        }
        RowKind::Data
    }

    fn is_period_header(&self) -> bool {
        self.0
            .cells()
            .any(|cell| cell.value().name() == "th" && cell.value().attr("colspan") == Some("6"))
    }

    /// The period clock, e.g. `"11:45.0"`.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.data_cell_text(TIMESTAMP_CELL)
    }

    #[must_use]
    pub fn away_team_description(&self) -> String {
        self.data_cell_text(AWAY_DESCRIPTION_CELL)
    }

    /// The running score, e.g. `"2-0"` (away first).
    #[must_use]
    pub fn scores(&self) -> String {
        self.data_cell_text(SCORES_CELL)
    }

    #[must_use]
    pub fn home_team_description(&self) -> String {
        self.data_cell_text(HOME_DESCRIPTION_CELL)
    }

    /// Whether the away column carries this event.
    #[must_use]
    pub fn is_away_team_play(&self) -> bool {
        !self.away_team_description().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::test_support::document;

    const PAGE: &str = r#"
        <div class="scorebox">
          <div><strong><a href="/teams/MIL/2020.html">Milwaukee Bucks</a></strong></div>
          <div><strong><a href="/teams/BOS/2020.html">Boston Celtics</a></strong></div>
        </div>
        <table id="pbp">
          <tr id="q1" class="thead"><th colspan="6">1st Q</th></tr>
          <tr class="thead"><th>Time</th><th>Milwaukee</th><th></th><th>Score</th><th></th><th>Boston</th></tr>
          <tr><td>12:00.0</td><td colspan="5">Start of 1st quarter</td></tr>
          <tr><td>11:45.0</td><td>G. Antetokounmpo makes 2-pt layup</td><td>+2</td><td>2-0</td><td></td><td></td></tr>
          <tr><td>11:30.0</td><td></td><td></td><td>2-3</td><td>+3</td><td>J. Tatum makes 3-pt jump shot</td></tr>
        </table>"#;

    #[test]
    fn reads_scorebox_team_names() {
        let html = document(PAGE);
        let page = PlayByPlayPage::new(&html);
        assert_eq!(page.away_team_name().as_deref(), Some("Milwaukee Bucks"));
        assert_eq!(page.home_team_name().as_deref(), Some("Boston Celtics"));
    }

    #[test]
    fn classifies_rows_positionally() {
        let html = document(PAGE);
        let rows = PlayByPlayPage::new(&html).table().unwrap().event_rows();
        let kinds: Vec<RowKind> = rows.iter().map(PlayByPlayRow::kind).collect();
        assert_eq!(
            kinds,
            vec![
                RowKind::PeriodMarker,
                RowKind::Header,
                RowKind::Filler,
                RowKind::Data,
                RowKind::Data,
            ]
        );
        assert_eq!(rows[3].timestamp(), "11:45.0");
        assert_eq!(rows[3].scores(), "2-0");
        assert!(rows[3].is_away_team_play());
        assert!(!rows[4].is_away_team_play());
        assert_eq!(rows[4].home_team_description(), "J. Tatum makes 3-pt jump shot");
    }
}
