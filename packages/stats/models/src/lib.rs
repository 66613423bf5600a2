#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Basketball domain enumerations and normalized statistics records.
//!
//! The markup extraction layer in `courtside_parser` turns statistics pages
//! into the record types defined here. Downstream storage consumes them as
//! plain structured data, so every record is `Serialize` + `Deserialize`.
//!
//! Statistical fields are `Option`s: an empty source cell (or one that could
//! not be coerced) becomes `None`, never zero.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// An NBA/ABA/BAA franchise identity, including relocated and renamed
/// historical franchises.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Team {
    AtlantaHawks,
    BostonCeltics,
    BrooklynNets,
    CharlotteHornets,
    ChicagoBulls,
    ClevelandCavaliers,
    DallasMavericks,
    DenverNuggets,
    DetroitPistons,
    GoldenStateWarriors,
    HoustonRockets,
    IndianaPacers,
    LosAngelesClippers,
    LosAngelesLakers,
    MemphisGrizzlies,
    MiamiHeat,
    MilwaukeeBucks,
    MinnesotaTimberwolves,
    NewOrleansPelicans,
    NewYorkKnicks,
    OklahomaCityThunder,
    OrlandoMagic,
    Philadelphia76ers,
    PhoenixSuns,
    PortlandTrailBlazers,
    SacramentoKings,
    SanAntonioSpurs,
    TorontoRaptors,
    UtahJazz,
    WashingtonWizards,

    // Historical
    BaltimoreBullets,
    BuffaloBraves,
    CapitalBullets,
    CharlotteBobcats,
    CincinnatiRoyals,
    KansasCityKings,
    KansasCityOmahaKings,
    MinneapolisLakers,
    NewJerseyNets,
    NewOrleansHornets,
    NewOrleansJazz,
    NewOrleansOklahomaCityHornets,
    PhiladelphiaWarriors,
    SanDiegoClippers,
    SanDiegoRockets,
    SanFranciscoWarriors,
    SeattleSupersonics,
    StLouisHawks,
    SyracuseNationals,
    VancouverGrizzlies,
    WashingtonBullets,
}

/// A roster position. Older seasons list the generic guard/forward
/// positions instead of the five specific ones.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
    Guard,
    Forward,
}

/// Where a game was played relative to the team the row describes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Location {
    Home,
    Away,
    /// Neutral-site games (international series, bubble games).
    Neutral,
}

/// Game outcome from the perspective of the row's team.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Win,
    Loss,
}

/// Professional league a season or player result belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum League {
    /// National Basketball Association
    Nba,
    /// American Basketball Association (1967-1976)
    Aba,
    /// Basketball Association of America (1946-1949)
    Baa,
}

/// Kind of game period a play-by-play event occurred in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodType {
    Quarter,
    Overtime,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Conference {
    Eastern,
    Western,
}

/// Standings division. `Midwest` existed until the 2004 realignment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Division {
    Atlantic,
    Central,
    Southeast,
    Northwest,
    Pacific,
    Southwest,
    Midwest,
}

/// Counting statistics shared by season totals and single-game box scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    pub made_field_goals: Option<u32>,
    pub attempted_field_goals: Option<u32>,
    pub made_three_point_field_goals: Option<u32>,
    pub attempted_three_point_field_goals: Option<u32>,
    pub made_free_throws: Option<u32>,
    pub attempted_free_throws: Option<u32>,
    pub offensive_rebounds: Option<u32>,
    pub defensive_rebounds: Option<u32>,
    pub assists: Option<u32>,
    pub steals: Option<u32>,
    pub blocks: Option<u32>,
    pub turnovers: Option<u32>,
    pub personal_fouls: Option<u32>,
    pub points: Option<u32>,
}

/// One row of a season totals table.
///
/// A player traded mid-season has one row per team plus a combined row;
/// the combined row has `team: None` and `is_combined_totals: true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonTotals {
    /// Canonical player identifier (e.g. `"jamesle01"`). `None` when the
    /// source row carries no identifier.
    pub slug: Option<String>,
    pub name: String,
    pub positions: Vec<Position>,
    pub age: Option<u32>,
    pub team: Option<Team>,
    pub is_combined_totals: bool,
    pub games_played: Option<u32>,
    pub games_started: Option<u32>,
    pub minutes_played: Option<u32>,
    #[serde(flatten)]
    pub stats: StatLine,
}

/// One row of an advanced season totals table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAdvancedSeasonTotals {
    pub slug: Option<String>,
    pub name: String,
    pub positions: Vec<Position>,
    pub age: Option<u32>,
    pub team: Option<Team>,
    pub is_combined_totals: bool,
    pub games_played: Option<u32>,
    pub minutes_played: Option<u32>,
    pub player_efficiency_rating: Option<f64>,
    pub true_shooting_percentage: Option<f64>,
    pub three_point_attempt_rate: Option<f64>,
    pub free_throw_attempt_rate: Option<f64>,
    pub offensive_rebound_percentage: Option<f64>,
    pub defensive_rebound_percentage: Option<f64>,
    pub total_rebound_percentage: Option<f64>,
    pub assist_percentage: Option<f64>,
    pub steal_percentage: Option<f64>,
    pub block_percentage: Option<f64>,
    pub turnover_percentage: Option<f64>,
    pub usage_percentage: Option<f64>,
    pub offensive_win_shares: Option<f64>,
    pub defensive_win_shares: Option<f64>,
    pub win_shares: Option<f64>,
    pub win_shares_per_48_minutes: Option<f64>,
    pub offensive_box_plus_minus: Option<f64>,
    pub defensive_box_plus_minus: Option<f64>,
    pub box_plus_minus: Option<f64>,
    pub value_over_replacement_player: Option<f64>,
}

/// A player's line in a single game's box score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBoxScore {
    pub slug: Option<String>,
    pub name: String,
    pub team: Team,
    pub opponent: Team,
    pub location: Location,
    /// `false` for "Did Not Play" / "Not With Team" rows, whose
    /// statistics are all `None`.
    pub active: bool,
    pub seconds_played: Option<u32>,
    #[serde(flatten)]
    pub stats: StatLine,
    pub plus_minus: Option<i32>,
}

/// A team's totals row from a single game's box score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBoxScore {
    pub team: Team,
    pub opponent: Team,
    pub location: Location,
    pub minutes_played: Option<u32>,
    #[serde(flatten)]
    pub stats: StatLine,
}

/// Every line extracted from one game's box score page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBoxScore {
    pub teams: Vec<TeamBoxScore>,
    pub players: Vec<PlayerBoxScore>,
}

/// One game from a player's season game log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGameLog {
    pub date: Option<NaiveDate>,
    pub team: Team,
    pub location: Location,
    pub opponent: Team,
    pub outcome: Outcome,
    /// Final point differential from the player's team's perspective.
    pub margin: Option<i32>,
    pub active: bool,
    pub started: Option<bool>,
    pub seconds_played: Option<u32>,
    #[serde(flatten)]
    pub stats: StatLine,
    pub game_score: Option<f64>,
    pub plus_minus: Option<i32>,
}

/// A scheduled (or completed) game from a season schedule page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    /// Tip-off time in the caller's requested zone. Games without a
    /// published time of day start at local midnight US Eastern.
    pub start_time: DateTime<FixedOffset>,
    pub away_team: Team,
    pub home_team: Team,
    /// `None` for games not yet played.
    pub away_team_score: Option<u32>,
    pub home_team_score: Option<u32>,
}

/// A single scoring or non-scoring event from a play-by-play table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayByPlayEvent {
    /// Quarter number (1-based) or overtime number (1-based), depending on
    /// `period_type`.
    pub period: u32,
    pub period_type: PeriodType,
    pub remaining_seconds_in_period: f64,
    pub relevant_team: Team,
    pub away_team: Team,
    pub home_team: Team,
    pub away_score: u32,
    pub home_score: u32,
    pub description: String,
}

/// A team's row in a conference standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRecord {
    pub team: Team,
    pub conference: Conference,
    /// `None` for conference-only tables that carry no division headers.
    pub division: Option<Division>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
}

/// A player hit on a search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSearchResult {
    pub name: String,
    pub slug: Option<String>,
    pub leagues: Vec<League>,
}

/// One player on a team's season roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub slug: Option<String>,
    pub name: String,
    pub jersey_number: Option<String>,
    pub positions: Vec<Position>,
    pub height_inches: Option<u32>,
    pub weight_pounds: Option<u32>,
    pub birth_date: Option<NaiveDate>,
    /// Lowercase ISO country code as printed in the roster flag cell.
    pub birth_country: Option<String>,
    /// Completed seasons before this one; rookies are `Some(0)`.
    pub years_of_experience: Option<u32>,
    pub colleges: Vec<String>,
}

/// One season of an executive's front-office history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSeason {
    pub season_end_year: i32,
    pub team: Option<Team>,
    pub league: League,
    pub role: Option<String>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
}

/// One season of a referee's officiating history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefereeSeason {
    pub season_end_year: i32,
    pub league: League,
    pub regular_season_games: Option<u32>,
    pub playoff_games: Option<u32>,
}
