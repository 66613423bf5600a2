//! A player's regular-season game log.

use scraper::{ElementRef, Html};

use super::{CountingStats, RowView, RowWrapper, TableView, TeamIdentity, find_table};

pub const GAME_LOG_TABLE_IDS: &[&str] = &["player_game_log_reg", "pgl_basic"];

#[derive(Debug, Clone, Copy)]
pub struct GameLogTable<'a> {
    element: ElementRef<'a>,
}

impl<'a> GameLogTable<'a> {
    #[must_use]
    pub fn find(document: &'a Html) -> Option<Self> {
        find_table(document, GAME_LOG_TABLE_IDS).map(|element| Self { element })
    }

    #[must_use]
    pub fn game_rows(&self) -> Vec<GameLogRow<'a>> {
        self.rows().into_iter().map(GameLogRow).collect()
    }
}

impl<'a> TableView<'a> for GameLogTable<'a> {
    fn element(&self) -> ElementRef<'a> {
        self.element
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GameLogRow<'a>(pub RowView<'a>);

impl<'a> GameLogRow<'a> {
    #[must_use]
    pub fn date(&self) -> String {
        self.0.stat_any(&["date", "date_game"])
    }

    #[must_use]
    pub fn location(&self) -> String {
        self.0.stat("game_location")
    }

    #[must_use]
    pub fn opponent_code(&self) -> String {
        self.0.stat_any(&["opp_name_abbr", "opp_id"])
    }

    #[must_use]
    pub fn result(&self) -> String {
        self.0.stat("game_result")
    }

    /// The games-started cell. Inactive rows replace it (and every stat
    /// after it) with a single reason cell spanning the remaining columns.
    #[must_use]
    pub fn starter_indicator_cell(&self) -> Option<ElementRef<'a>> {
        self.0.cell_any(&["is_starter", "gs", "reason"])
    }

    #[must_use]
    pub fn starter_indicator(&self) -> String {
        self.starter_indicator_cell()
            .map(super::text_of)
            .unwrap_or_default()
    }

    /// A game is active iff its starter indicator cell has no colspan.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.starter_indicator_cell()
            .is_some_and(|cell| cell.value().attr("colspan").is_none())
    }

    #[must_use]
    pub fn minutes_played(&self) -> String {
        self.0.stat("mp")
    }

    #[must_use]
    pub fn game_score(&self) -> String {
        self.0.stat("game_score")
    }

    #[must_use]
    pub fn plus_minus(&self) -> String {
        self.0.stat("plus_minus")
    }
}

impl<'a> RowWrapper<'a> for GameLogRow<'a> {
    fn row(&self) -> RowView<'a> {
        self.0
    }
}

impl<'a> TeamIdentity<'a> for GameLogRow<'a> {}
impl<'a> CountingStats<'a> for GameLogRow<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::test_support::document;

    #[test]
    fn colspan_on_starter_cell_means_inactive() {
        let html = document(
            r#"<table id="pgl_basic"><tbody>
                <tr><td data-stat="date_game">2019-10-22</td><td data-stat="team_id">LAL</td>
                    <td data-stat="game_location">@</td><td data-stat="opp_id">LAC</td>
                    <td data-stat="game_result">L (-10)</td><td data-stat="gs">1</td></tr>
                <tr><td data-stat="date_game">2019-10-24</td><td data-stat="team_id">LAL</td>
                    <td data-stat="game_location"></td><td data-stat="opp_id">UTA</td>
                    <td data-stat="game_result">W (+9)</td><td data-stat="reason" colspan="21">Inactive</td></tr>
            </tbody></table>"#,
        );
        let rows = GameLogTable::find(&html).unwrap().game_rows();
        assert!(rows[0].is_active());
        assert_eq!(rows[0].starter_indicator(), "1");
        assert_eq!(rows[0].location(), "@");
        assert!(!rows[1].is_active());
        assert_eq!(rows[1].opponent_code(), "UTA");
    }
}
