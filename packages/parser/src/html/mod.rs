//! Read-only views over parsed statistics pages.
//!
//! Every wrapper borrows from a [`scraper::Html`] document owned by the
//! caller and exposes cells by their stable `data-stat` attribute (or by
//! position, for the play-by-play table which has none). Accessors return
//! raw trimmed text; coercion happens in [`crate::parsers`].
//!
//! Shared behaviour is expressed as small capability traits instead of a
//! hierarchy:
//!
//! * [`TableView`]: anything with `<tbody>` rows.
//! * [`RowWrapper`]: a typed row over a [`RowView`].
//! * [`PlayerIdentity`]: rows with a player name cell carrying the slug.
//! * [`TeamIdentity`]: rows with a team code cell.
//! * [`CountingStats`]: rows with the standard counting-stat columns.

pub mod box_score;
pub mod game_log;
pub mod history;
pub mod play_by_play;
pub mod roster;
pub mod schedule;
pub mod search;
pub mod season_totals;
pub mod standings;

use scraper::{ElementRef, Html, Selector};

use crate::ParseError;

/// Attribute on the player name cell holding the canonical player slug.
pub const SLUG_ATTRIBUTE: &str = "data-append-csv";

/// `data-stat` names of the player name cell, newest layout first.
const PLAYER_CELL_STATS: &[&str] = &["name_display", "player"];

/// `data-stat` names of the team code cell, newest layout first.
const TEAM_CELL_STATS: &[&str] = &["team_name_abbr", "team_id"];

/// Printed in the player cell of the league-average footer-in-body row.
const LEAGUE_AVERAGE_LABEL: &str = "League Average";

/// Builds a selector from a literal known to be valid.
pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|_| unreachable!("invalid static selector {css}"))
}

/// Parses a selector built at runtime.
///
/// # Errors
///
/// Returns [`ParseError::InvalidSelector`] if `css` is not valid.
pub fn parse_selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::InvalidSelector {
        selector: css.to_owned(),
        message: e.to_string(),
    })
}

/// Collects an element's text content, trimmed.
#[must_use]
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Finds the first `<table>` whose id is one of `ids`.
///
/// Older and newer page layouts name the same table differently, so
/// callers pass every known id.
#[must_use]
pub fn find_table<'a>(document: &'a Html, ids: &[&str]) -> Option<ElementRef<'a>> {
    let tables = selector("table[id]");
    ids.iter().find_map(|id| {
        document
            .select(&tables)
            .find(|table| table.value().id() == Some(*id))
    })
}

/// Shape of a table row, decided once so parsers can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A repeated column header or section header (`class="thead"`, or a
    /// row with no `<td>` cells).
    Header,
    /// A row carrying data for the table's subject.
    Data,
    /// A play-by-play row that opens a new period.
    PeriodMarker,
    /// A row that is neither header nor data: league averages, play-by-play
    /// start/end-of-period notes, jump balls.
    Filler,
}

/// A single `<tr>` of some table.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    element: ElementRef<'a>,
}

impl<'a> RowView<'a> {
    #[must_use]
    pub const fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    #[must_use]
    pub const fn element(&self) -> ElementRef<'a> {
        self.element
    }

    /// Direct `<th>`/`<td>` children, in order.
    pub fn cells(&self) -> impl Iterator<Item = ElementRef<'a>> + use<'a> {
        self.element
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|cell| matches!(cell.value().name(), "td" | "th"))
    }

    /// Direct `<td>` children only.
    #[must_use]
    pub fn data_cells(&self) -> Vec<ElementRef<'a>> {
        self.cells()
            .filter(|cell| cell.value().name() == "td")
            .collect()
    }

    /// The cell whose `data-stat` attribute equals `stat`.
    #[must_use]
    pub fn cell(&self, stat: &str) -> Option<ElementRef<'a>> {
        self.cells()
            .find(|cell| cell.value().attr("data-stat") == Some(stat))
    }

    /// The first cell matching any of `stats`, tried in order.
    #[must_use]
    pub fn cell_any(&self, stats: &[&str]) -> Option<ElementRef<'a>> {
        stats.iter().find_map(|stat| self.cell(stat))
    }

    /// Trimmed text of the `stat` cell, or an empty string if absent.
    #[must_use]
    pub fn stat(&self, stat: &str) -> String {
        self.cell(stat).map(text_of).unwrap_or_default()
    }

    /// Trimmed text of the first cell matching any of `stats`.
    #[must_use]
    pub fn stat_any(&self, stats: &[&str]) -> String {
        self.cell_any(stats).map(text_of).unwrap_or_default()
    }

    /// An attribute of the `stat` cell.
    #[must_use]
    pub fn stat_attr(&self, stat: &str, attr: &str) -> Option<&'a str> {
        self.cell(stat)?.value().attr(attr)
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.element.value().classes().any(|c| c == class)
    }

    /// Classifies the row for tables keyed by `data-stat`.
    ///
    /// The play-by-play table has its own positional classification in
    /// [`play_by_play::PlayByPlayRow::kind`].
    #[must_use]
    pub fn kind(&self) -> RowKind {
        if self.has_class("thead") || self.has_class("over_header") {
            return RowKind::Header;
        }
        if self.data_cells().is_empty() {
            return RowKind::Header;
        }
        if self.has_class("league_average")
            || self.stat_any(PLAYER_CELL_STATS) == LEAGUE_AVERAGE_LABEL
        {
            return RowKind::Filler;
        }
        RowKind::Data
    }

    #[must_use]
    pub fn is_data(&self) -> bool {
        self.kind() == RowKind::Data
    }
}

/// A table whose body rows can be listed.
pub trait TableView<'a> {
    /// The `<table>` element.
    fn element(&self) -> ElementRef<'a>;

    /// Every `<tbody>` row, headers and fillers included.
    fn rows(&self) -> Vec<RowView<'a>> {
        let rows = selector("tbody > tr");
        self.element().select(&rows).map(RowView::new).collect()
    }

    /// Every `<tfoot>` row.
    fn footer_rows(&self) -> Vec<RowView<'a>> {
        let rows = selector("tfoot > tr");
        self.element().select(&rows).map(RowView::new).collect()
    }

    /// The table's `id` attribute.
    fn id(&self) -> Option<&'a str> {
        self.element().value().id()
    }
}

/// A typed wrapper around a [`RowView`].
pub trait RowWrapper<'a> {
    fn row(&self) -> RowView<'a>;
}

/// Rows that identify a player.
pub trait PlayerIdentity<'a>: RowWrapper<'a> {
    fn player_cell(&self) -> Option<ElementRef<'a>> {
        self.row().cell_any(PLAYER_CELL_STATS)
    }

    /// The canonical slug from the name cell, when the source provides one.
    /// Never synthesized from the name.
    fn slug(&self) -> Option<String> {
        self.player_cell()?
            .value()
            .attr(SLUG_ATTRIBUTE)
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .map(str::to_owned)
    }

    fn player_name(&self) -> String {
        self.player_cell().map(text_of).unwrap_or_default()
    }
}

/// Rows that carry a team code.
pub trait TeamIdentity<'a>: RowWrapper<'a> {
    fn team_code(&self) -> String {
        self.row().stat_any(TEAM_CELL_STATS)
    }
}

/// The standard counting-stat columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountingStat {
    MadeFieldGoals,
    AttemptedFieldGoals,
    MadeThreePointFieldGoals,
    AttemptedThreePointFieldGoals,
    MadeFreeThrows,
    AttemptedFreeThrows,
    OffensiveRebounds,
    DefensiveRebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    PersonalFouls,
    Points,
}

impl CountingStat {
    #[must_use]
    pub const fn data_stat(self) -> &'static str {
        match self {
            Self::MadeFieldGoals => "fg",
            Self::AttemptedFieldGoals => "fga",
            Self::MadeThreePointFieldGoals => "fg3",
            Self::AttemptedThreePointFieldGoals => "fg3a",
            Self::MadeFreeThrows => "ft",
            Self::AttemptedFreeThrows => "fta",
            Self::OffensiveRebounds => "orb",
            Self::DefensiveRebounds => "drb",
            Self::Assists => "ast",
            Self::Steals => "stl",
            Self::Blocks => "blk",
            Self::Turnovers => "tov",
            Self::PersonalFouls => "pf",
            Self::Points => "pts",
        }
    }
}

/// Rows with the standard counting-stat columns.
pub trait CountingStats<'a>: RowWrapper<'a> {
    fn counting_stat(&self, stat: CountingStat) -> String {
        self.row().stat(stat.data_stat())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use scraper::Html;

    /// Wraps table markup in a minimal document.
    pub fn document(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }
}
