//! Season totals and advanced season totals tables.

use scraper::{ElementRef, Html};

use super::{
    CountingStats, PlayerIdentity, RowView, RowWrapper, TableView, TeamIdentity, find_table,
};

pub const SEASON_TOTALS_TABLE_IDS: &[&str] = &["totals_stats", "totals"];
pub const ADVANCED_TOTALS_TABLE_IDS: &[&str] = &["advanced_stats", "advanced"];

/// The per-player season totals table of a league season page.
#[derive(Debug, Clone, Copy)]
pub struct SeasonTotalsTable<'a> {
    element: ElementRef<'a>,
}

impl<'a> SeasonTotalsTable<'a> {
    #[must_use]
    pub fn find(document: &'a Html) -> Option<Self> {
        find_table(document, SEASON_TOTALS_TABLE_IDS).map(|element| Self { element })
    }

    #[must_use]
    pub fn player_rows(&self) -> Vec<SeasonTotalsRow<'a>> {
        self.rows().into_iter().map(SeasonTotalsRow).collect()
    }
}

impl<'a> TableView<'a> for SeasonTotalsTable<'a> {
    fn element(&self) -> ElementRef<'a> {
        self.element
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SeasonTotalsRow<'a>(pub RowView<'a>);

impl SeasonTotalsRow<'_> {
    #[must_use]
    pub fn positions(&self) -> String {
        self.0.stat("pos")
    }

    #[must_use]
    pub fn age(&self) -> String {
        self.0.stat("age")
    }

    #[must_use]
    pub fn games_played(&self) -> String {
        self.0.stat_any(&["games", "g"])
    }

    #[must_use]
    pub fn games_started(&self) -> String {
        self.0.stat_any(&["games_started", "gs"])
    }

    #[must_use]
    pub fn minutes_played(&self) -> String {
        self.0.stat("mp")
    }
}

impl<'a> RowWrapper<'a> for SeasonTotalsRow<'a> {
    fn row(&self) -> RowView<'a> {
        self.0
    }
}

impl<'a> PlayerIdentity<'a> for SeasonTotalsRow<'a> {}
impl<'a> TeamIdentity<'a> for SeasonTotalsRow<'a> {}
impl<'a> CountingStats<'a> for SeasonTotalsRow<'a> {}

/// The advanced metrics table of a league season page.
#[derive(Debug, Clone, Copy)]
pub struct AdvancedTotalsTable<'a> {
    element: ElementRef<'a>,
}

impl<'a> AdvancedTotalsTable<'a> {
    #[must_use]
    pub fn find(document: &'a Html) -> Option<Self> {
        find_table(document, ADVANCED_TOTALS_TABLE_IDS).map(|element| Self { element })
    }

    #[must_use]
    pub fn player_rows(&self) -> Vec<AdvancedTotalsRow<'a>> {
        self.rows().into_iter().map(AdvancedTotalsRow).collect()
    }
}

impl<'a> TableView<'a> for AdvancedTotalsTable<'a> {
    fn element(&self) -> ElementRef<'a> {
        self.element
    }
}

/// Advanced metric columns, keyed by `data-stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancedStat {
    PlayerEfficiencyRating,
    TrueShootingPercentage,
    ThreePointAttemptRate,
    FreeThrowAttemptRate,
    OffensiveReboundPercentage,
    DefensiveReboundPercentage,
    TotalReboundPercentage,
    AssistPercentage,
    StealPercentage,
    BlockPercentage,
    TurnoverPercentage,
    UsagePercentage,
    OffensiveWinShares,
    DefensiveWinShares,
    WinShares,
    WinSharesPer48Minutes,
    OffensiveBoxPlusMinus,
    DefensiveBoxPlusMinus,
    BoxPlusMinus,
    ValueOverReplacementPlayer,
}

impl AdvancedStat {
    #[must_use]
    pub const fn data_stat(self) -> &'static str {
        match self {
            Self::PlayerEfficiencyRating => "per",
            Self::TrueShootingPercentage => "ts_pct",
            Self::ThreePointAttemptRate => "fg3a_per_fga_pct",
            Self::FreeThrowAttemptRate => "fta_per_fga_pct",
            Self::OffensiveReboundPercentage => "orb_pct",
            Self::DefensiveReboundPercentage => "drb_pct",
            Self::TotalReboundPercentage => "trb_pct",
            Self::AssistPercentage => "ast_pct",
            Self::StealPercentage => "stl_pct",
            Self::BlockPercentage => "blk_pct",
            Self::TurnoverPercentage => "tov_pct",
            Self::UsagePercentage => "usg_pct",
            Self::OffensiveWinShares => "ows",
            Self::DefensiveWinShares => "dws",
            Self::WinShares => "ws",
            Self::WinSharesPer48Minutes => "ws_per_48",
            Self::OffensiveBoxPlusMinus => "obpm",
            Self::DefensiveBoxPlusMinus => "dbpm",
            Self::BoxPlusMinus => "bpm",
            Self::ValueOverReplacementPlayer => "vorp",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AdvancedTotalsRow<'a>(pub RowView<'a>);

impl AdvancedTotalsRow<'_> {
    #[must_use]
    pub fn positions(&self) -> String {
        self.0.stat("pos")
    }

    #[must_use]
    pub fn age(&self) -> String {
        self.0.stat("age")
    }

    #[must_use]
    pub fn games_played(&self) -> String {
        self.0.stat_any(&["games", "g"])
    }

    #[must_use]
    pub fn minutes_played(&self) -> String {
        self.0.stat("mp")
    }

    #[must_use]
    pub fn advanced_stat(&self, stat: AdvancedStat) -> String {
        self.0.stat(stat.data_stat())
    }
}

impl<'a> RowWrapper<'a> for AdvancedTotalsRow<'a> {
    fn row(&self) -> RowView<'a> {
        self.0
    }
}

impl<'a> PlayerIdentity<'a> for AdvancedTotalsRow<'a> {}
impl<'a> TeamIdentity<'a> for AdvancedTotalsRow<'a> {}
