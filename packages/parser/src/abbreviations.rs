//! Abbreviation tables and lookup parsers.
//!
//! Statistics pages print teams, positions, locations, outcomes and leagues
//! as short codes. Each lookup here fails closed: an unknown code raises
//! [`ParseError::UnknownAbbreviation`] so that drift in the source markup is
//! noticed instead of silently producing nulls. The only intentional
//! null-returning mapping is [`team_from_optional_abbreviation`], used for
//! combined-team rows.

use courtside_stats_models::{Conference, Division, League, Location, Outcome, Position, Team};

use crate::ParseError;

// ── Teams ────────────────────────────────────────────────────────────────

/// Team codes as printed in `team_id` cells, including historical codes.
pub const TEAM_ABBREVIATIONS: &[(&str, Team)] = &[
    ("ATL", Team::AtlantaHawks),
    ("BOS", Team::BostonCeltics),
    ("BRK", Team::BrooklynNets),
    ("CHO", Team::CharlotteHornets),
    ("CHH", Team::CharlotteHornets),
    ("CHI", Team::ChicagoBulls),
    ("CLE", Team::ClevelandCavaliers),
    ("DAL", Team::DallasMavericks),
    ("DEN", Team::DenverNuggets),
    ("DET", Team::DetroitPistons),
    ("GSW", Team::GoldenStateWarriors),
    ("HOU", Team::HoustonRockets),
    ("IND", Team::IndianaPacers),
    ("LAC", Team::LosAngelesClippers),
    ("LAL", Team::LosAngelesLakers),
    ("MEM", Team::MemphisGrizzlies),
    ("MIA", Team::MiamiHeat),
    ("MIL", Team::MilwaukeeBucks),
    ("MIN", Team::MinnesotaTimberwolves),
    ("NOP", Team::NewOrleansPelicans),
    ("NYK", Team::NewYorkKnicks),
    ("OKC", Team::OklahomaCityThunder),
    ("ORL", Team::OrlandoMagic),
    ("PHI", Team::Philadelphia76ers),
    ("PHO", Team::PhoenixSuns),
    ("POR", Team::PortlandTrailBlazers),
    ("SAC", Team::SacramentoKings),
    ("SAS", Team::SanAntonioSpurs),
    ("TOR", Team::TorontoRaptors),
    ("UTA", Team::UtahJazz),
    ("WAS", Team::WashingtonWizards),
    // Historical
    ("BAL", Team::BaltimoreBullets),
    ("BUF", Team::BuffaloBraves),
    ("CAP", Team::CapitalBullets),
    ("CHA", Team::CharlotteBobcats),
    ("CIN", Team::CincinnatiRoyals),
    ("KCK", Team::KansasCityKings),
    ("KCO", Team::KansasCityOmahaKings),
    ("MNL", Team::MinneapolisLakers),
    ("NJN", Team::NewJerseyNets),
    ("NOH", Team::NewOrleansHornets),
    ("NOJ", Team::NewOrleansJazz),
    ("NOK", Team::NewOrleansOklahomaCityHornets),
    ("PHW", Team::PhiladelphiaWarriors),
    ("SDC", Team::SanDiegoClippers),
    ("SDR", Team::SanDiegoRockets),
    ("SEA", Team::SeattleSupersonics),
    ("SFW", Team::SanFranciscoWarriors),
    ("STL", Team::StLouisHawks),
    ("SYR", Team::SyracuseNationals),
    ("VAN", Team::VancouverGrizzlies),
    ("WSB", Team::WashingtonBullets),
];

/// Upper-cased full team names as printed on schedule, play-by-play and
/// standings pages.
pub const TEAM_NAMES: &[(&str, Team)] = &[
    ("ATLANTA HAWKS", Team::AtlantaHawks),
    ("BOSTON CELTICS", Team::BostonCeltics),
    ("BROOKLYN NETS", Team::BrooklynNets),
    ("CHARLOTTE HORNETS", Team::CharlotteHornets),
    ("CHICAGO BULLS", Team::ChicagoBulls),
    ("CLEVELAND CAVALIERS", Team::ClevelandCavaliers),
    ("DALLAS MAVERICKS", Team::DallasMavericks),
    ("DENVER NUGGETS", Team::DenverNuggets),
    ("DETROIT PISTONS", Team::DetroitPistons),
    ("GOLDEN STATE WARRIORS", Team::GoldenStateWarriors),
    ("HOUSTON ROCKETS", Team::HoustonRockets),
    ("INDIANA PACERS", Team::IndianaPacers),
    ("LOS ANGELES CLIPPERS", Team::LosAngelesClippers),
    ("LOS ANGELES LAKERS", Team::LosAngelesLakers),
    ("MEMPHIS GRIZZLIES", Team::MemphisGrizzlies),
    ("MIAMI HEAT", Team::MiamiHeat),
    ("MILWAUKEE BUCKS", Team::MilwaukeeBucks),
    ("MINNESOTA TIMBERWOLVES", Team::MinnesotaTimberwolves),
    ("NEW ORLEANS PELICANS", Team::NewOrleansPelicans),
    ("NEW YORK KNICKS", Team::NewYorkKnicks),
    ("OKLAHOMA CITY THUNDER", Team::OklahomaCityThunder),
    ("ORLANDO MAGIC", Team::OrlandoMagic),
    ("PHILADELPHIA 76ERS", Team::Philadelphia76ers),
    ("PHOENIX SUNS", Team::PhoenixSuns),
    ("PORTLAND TRAIL BLAZERS", Team::PortlandTrailBlazers),
    ("SACRAMENTO KINGS", Team::SacramentoKings),
    ("SAN ANTONIO SPURS", Team::SanAntonioSpurs),
    ("TORONTO RAPTORS", Team::TorontoRaptors),
    ("UTAH JAZZ", Team::UtahJazz),
    ("WASHINGTON WIZARDS", Team::WashingtonWizards),
    // Historical
    ("BALTIMORE BULLETS", Team::BaltimoreBullets),
    ("BUFFALO BRAVES", Team::BuffaloBraves),
    ("CAPITAL BULLETS", Team::CapitalBullets),
    ("CHARLOTTE BOBCATS", Team::CharlotteBobcats),
    ("CINCINNATI ROYALS", Team::CincinnatiRoyals),
    ("KANSAS CITY KINGS", Team::KansasCityKings),
    ("KANSAS CITY-OMAHA KINGS", Team::KansasCityOmahaKings),
    ("MINNEAPOLIS LAKERS", Team::MinneapolisLakers),
    ("NEW JERSEY NETS", Team::NewJerseyNets),
    ("NEW ORLEANS HORNETS", Team::NewOrleansHornets),
    ("NEW ORLEANS JAZZ", Team::NewOrleansJazz),
    (
        "NEW ORLEANS/OKLAHOMA CITY HORNETS",
        Team::NewOrleansOklahomaCityHornets,
    ),
    ("PHILADELPHIA WARRIORS", Team::PhiladelphiaWarriors),
    ("SAN DIEGO CLIPPERS", Team::SanDiegoClippers),
    ("SAN DIEGO ROCKETS", Team::SanDiegoRockets),
    ("SAN FRANCISCO WARRIORS", Team::SanFranciscoWarriors),
    ("SEATTLE SUPERSONICS", Team::SeattleSupersonics),
    ("ST. LOUIS HAWKS", Team::StLouisHawks),
    ("SYRACUSE NATIONALS", Team::SyracuseNationals),
    ("VANCOUVER GRIZZLIES", Team::VancouverGrizzlies),
    ("WASHINGTON BULLETS", Team::WashingtonBullets),
];

/// Legacy aggregate code used before multi-team rows were labelled `2TM`,
/// `3TM`, ...
const LEGACY_COMBINED_TEAM_CODE: &str = "TOT";

/// Suffix of the aggregate row code for players traded mid-season.
const COMBINED_TEAM_SUFFIX: &str = "TM";

/// Looks up a team by its code (e.g. `"BOS"`).
///
/// # Errors
///
/// Returns [`ParseError::UnknownAbbreviation`] for unrecognized codes.
pub fn team_from_abbreviation(abbreviation: &str) -> Result<Team, ParseError> {
    let code = abbreviation.trim();
    TEAM_ABBREVIATIONS
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, team)| *team)
        .ok_or_else(|| unknown("team", code))
}

/// Like [`team_from_abbreviation`] but maps combined-team codes (`TOT`,
/// `2TM`, `3TM`, ...) and empty cells to `None`.
///
/// # Errors
///
/// Returns [`ParseError::UnknownAbbreviation`] for any other unknown code.
pub fn team_from_optional_abbreviation(abbreviation: &str) -> Result<Option<Team>, ParseError> {
    let code = abbreviation.trim();
    if code.is_empty() || is_combined_team_code(code) {
        return Ok(None);
    }
    team_from_abbreviation(code).map(Some)
}

/// Returns `true` for the aggregate team code of a traded player's
/// combined-season row.
#[must_use]
pub fn is_combined_team_code(code: &str) -> bool {
    let code = code.trim();
    code == LEGACY_COMBINED_TEAM_CODE
        || code
            .strip_suffix(COMBINED_TEAM_SUFFIX)
            .is_some_and(|count| !count.is_empty() && count.chars().all(|c| c.is_ascii_digit()))
}

/// Looks up a team by its full name (e.g. `"Boston Celtics*"`).
///
/// Case-insensitive. Trailing playoff markers (`*`) and seed annotations
/// (`(3)`) are ignored.
///
/// # Errors
///
/// Returns [`ParseError::UnknownAbbreviation`] for unrecognized names.
pub fn team_from_name(name: &str) -> Result<Team, ParseError> {
    let cleaned = clean_team_name(name);
    TEAM_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == cleaned)
        .map(|(_, team)| *team)
        .ok_or_else(|| unknown("team name", name.trim()))
}

fn clean_team_name(name: &str) -> String {
    let mut cleaned = name.trim();
    if let Some(open) = cleaned.rfind('(')
        && cleaned.ends_with(')')
    {
        cleaned = cleaned[..open].trim_end();
    }
    cleaned.trim_end_matches('*').trim().to_uppercase()
}

// ── Positions ────────────────────────────────────────────────────────────

pub const POSITION_ABBREVIATIONS: &[(&str, Position)] = &[
    ("PG", Position::PointGuard),
    ("SG", Position::ShootingGuard),
    ("SF", Position::SmallForward),
    ("PF", Position::PowerForward),
    ("C", Position::Center),
    ("G", Position::Guard),
    ("F", Position::Forward),
];

/// Looks up a single position code.
///
/// # Errors
///
/// Returns [`ParseError::UnknownAbbreviation`] for unrecognized codes.
pub fn position_from_abbreviation(abbreviation: &str) -> Result<Position, ParseError> {
    let code = abbreviation.trim();
    POSITION_ABBREVIATIONS
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, position)| *position)
        .ok_or_else(|| unknown("position", code))
}

/// Parses a compound position cell such as `"PG-SG"` or `"G-F"`.
///
/// An empty cell yields an empty list.
///
/// # Errors
///
/// Returns [`ParseError::UnknownAbbreviation`] if any component is unknown.
pub fn positions_from_abbreviations(abbreviations: &str) -> Result<Vec<Position>, ParseError> {
    let trimmed = abbreviations.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split(['-', ','])
        .map(position_from_abbreviation)
        .collect()
}

// ── Location / outcome / league ──────────────────────────────────────────

/// Looks up a game location marker: empty for home, `@` for away, `N` for a
/// neutral site.
///
/// # Errors
///
/// Returns [`ParseError::UnknownAbbreviation`] for any other marker.
pub fn location_from_abbreviation(abbreviation: &str) -> Result<Location, ParseError> {
    match abbreviation.trim() {
        "" => Ok(Location::Home),
        "@" => Ok(Location::Away),
        "N" => Ok(Location::Neutral),
        other => Err(unknown("location", other)),
    }
}

/// Looks up an outcome code (`W` / `L`).
///
/// # Errors
///
/// Returns [`ParseError::UnknownAbbreviation`] for any other code.
pub fn outcome_from_abbreviation(abbreviation: &str) -> Result<Outcome, ParseError> {
    match abbreviation.trim() {
        "W" => Ok(Outcome::Win),
        "L" => Ok(Outcome::Loss),
        other => Err(unknown("outcome", other)),
    }
}

/// Looks up a league code (`NBA`, `ABA`, `BAA`). Case-insensitive.
///
/// # Errors
///
/// Returns [`ParseError::UnknownAbbreviation`] for any other code.
pub fn league_from_abbreviation(abbreviation: &str) -> Result<League, ParseError> {
    let code = abbreviation.trim();
    match code.to_uppercase().as_str() {
        "NBA" => Ok(League::Nba),
        "ABA" => Ok(League::Aba),
        "BAA" => Ok(League::Baa),
        _ => Err(unknown("league", code)),
    }
}

// ── Standings ────────────────────────────────────────────────────────────

/// Looks up a conference from a standings table suffix (`E` / `W`) or a
/// printed name (`"Eastern Conference"`).
///
/// # Errors
///
/// Returns [`ParseError::UnknownAbbreviation`] for anything else.
pub fn conference_from_abbreviation(abbreviation: &str) -> Result<Conference, ParseError> {
    let code = abbreviation.trim();
    match code.to_uppercase().as_str() {
        "E" | "EAST" | "EASTERN" | "EASTERN CONFERENCE" => Ok(Conference::Eastern),
        "W" | "WEST" | "WESTERN" | "WESTERN CONFERENCE" => Ok(Conference::Western),
        _ => Err(unknown("conference", code)),
    }
}

/// Looks up a division from a standings header (`"Atlantic Division"`).
///
/// Returns `None` when the text is not a division header at all (e.g. a
/// repeated column header), which is an expected row shape rather than an
/// unknown code.
#[must_use]
pub fn division_from_name(name: &str) -> Option<Division> {
    let upper = name.trim().to_uppercase();
    let bare = upper.strip_suffix(" DIVISION")?;
    match bare.trim() {
        "ATLANTIC" => Some(Division::Atlantic),
        "CENTRAL" => Some(Division::Central),
        "SOUTHEAST" => Some(Division::Southeast),
        "NORTHWEST" => Some(Division::Northwest),
        "PACIFIC" => Some(Division::Pacific),
        "SOUTHWEST" => Some(Division::Southwest),
        "MIDWEST" => Some(Division::Midwest),
        _ => None,
    }
}

fn unknown(kind: &'static str, value: &str) -> ParseError {
    ParseError::UnknownAbbreviation {
        kind,
        value: value.to_owned(),
    }
}
