//! Season totals and advanced season totals.

use courtside_stats_models::{PlayerAdvancedSeasonTotals, PlayerSeasonTotals};
use scraper::Html;

use super::{missing_table, stat_line};
use crate::{
    ParseError,
    abbreviations::{is_combined_team_code, positions_from_abbreviations, team_from_optional_abbreviation},
    coerce,
    html::{
        PlayerIdentity, TeamIdentity,
        season_totals::{
            ADVANCED_TOTALS_TABLE_IDS, AdvancedStat, AdvancedTotalsTable,
            SEASON_TOTALS_TABLE_IDS, SeasonTotalsTable,
        },
    },
};

/// Parses every player row of a season totals page.
///
/// A traded player has one row per team plus an aggregate row (`TOT`,
/// `2TM`, `3TM`). Aggregate rows are dropped unless
/// `include_combined_totals` is set; when kept they carry `team: None` and
/// `is_combined_totals: true`.
///
/// # Errors
///
/// * [`ParseError::MissingTable`] if the page has no totals table.
/// * [`ParseError::UnknownAbbreviation`] for an unrecognized team or
///   position code.
pub fn parse_season_totals(
    document: &Html,
    include_combined_totals: bool,
) -> Result<Vec<PlayerSeasonTotals>, ParseError> {
    let table =
        SeasonTotalsTable::find(document).ok_or_else(|| missing_table(SEASON_TOTALS_TABLE_IDS))?;

    let mut totals = Vec::new();
    for row in table.player_rows() {
        if !row.0.is_data() {
            continue;
        }

        let team_code = row.team_code();
        let is_combined_totals = is_combined_team_code(&team_code);
        if is_combined_totals && !include_combined_totals {
            continue;
        }

        totals.push(PlayerSeasonTotals {
            slug: row.slug(),
            name: row.player_name(),
            positions: positions_from_abbreviations(&row.positions())?,
            age: coerce::count(&row.age()),
            team: team_from_optional_abbreviation(&team_code)?,
            is_combined_totals,
            games_played: coerce::count(&row.games_played()),
            games_started: coerce::count(&row.games_started()),
            minutes_played: coerce::count(&row.minutes_played()),
            stats: stat_line(&row),
        });
    }

    log::debug!("Parsed {} season totals rows", totals.len());
    Ok(totals)
}

/// Parses every player row of an advanced season totals page, with the
/// same combined-row handling as [`parse_season_totals`].
///
/// # Errors
///
/// * [`ParseError::MissingTable`] if the page has no advanced table.
/// * [`ParseError::UnknownAbbreviation`] for an unrecognized team or
///   position code.
pub fn parse_advanced_season_totals(
    document: &Html,
    include_combined_totals: bool,
) -> Result<Vec<PlayerAdvancedSeasonTotals>, ParseError> {
    let table = AdvancedTotalsTable::find(document)
        .ok_or_else(|| missing_table(ADVANCED_TOTALS_TABLE_IDS))?;

    let mut totals = Vec::new();
    for row in table.player_rows() {
        if !row.0.is_data() {
            continue;
        }

        let team_code = row.team_code();
        let is_combined_totals = is_combined_team_code(&team_code);
        if is_combined_totals && !include_combined_totals {
            continue;
        }

        let metric = |stat: AdvancedStat| coerce::decimal(&row.advanced_stat(stat));
        totals.push(PlayerAdvancedSeasonTotals {
            slug: row.slug(),
            name: row.player_name(),
            positions: positions_from_abbreviations(&row.positions())?,
            age: coerce::count(&row.age()),
            team: team_from_optional_abbreviation(&team_code)?,
            is_combined_totals,
            games_played: coerce::count(&row.games_played()),
            minutes_played: coerce::count(&row.minutes_played()),
            player_efficiency_rating: metric(AdvancedStat::PlayerEfficiencyRating),
            true_shooting_percentage: metric(AdvancedStat::TrueShootingPercentage),
            three_point_attempt_rate: metric(AdvancedStat::ThreePointAttemptRate),
            free_throw_attempt_rate: metric(AdvancedStat::FreeThrowAttemptRate),
            offensive_rebound_percentage: metric(AdvancedStat::OffensiveReboundPercentage),
            defensive_rebound_percentage: metric(AdvancedStat::DefensiveReboundPercentage),
            total_rebound_percentage: metric(AdvancedStat::TotalReboundPercentage),
            assist_percentage: metric(AdvancedStat::AssistPercentage),
            steal_percentage: metric(AdvancedStat::StealPercentage),
            block_percentage: metric(AdvancedStat::BlockPercentage),
            turnover_percentage: metric(AdvancedStat::TurnoverPercentage),
            usage_percentage: metric(AdvancedStat::UsagePercentage),
            offensive_win_shares: metric(AdvancedStat::OffensiveWinShares),
            defensive_win_shares: metric(AdvancedStat::DefensiveWinShares),
            win_shares: metric(AdvancedStat::WinShares),
            win_shares_per_48_minutes: metric(AdvancedStat::WinSharesPer48Minutes),
            offensive_box_plus_minus: metric(AdvancedStat::OffensiveBoxPlusMinus),
            defensive_box_plus_minus: metric(AdvancedStat::DefensiveBoxPlusMinus),
            box_plus_minus: metric(AdvancedStat::BoxPlusMinus),
            value_over_replacement_player: metric(AdvancedStat::ValueOverReplacementPlayer),
        });
    }

    log::debug!("Parsed {} advanced season totals rows", totals.len());
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use courtside_stats_models::Team;

    use super::*;
    use crate::html::test_support::document;

    const TRADED_PLAYER: &str = r#"
        <table id="totals_stats"><tbody>
          <tr><th data-stat="ranker">1</th>
              <td data-stat="player" data-append-csv="harrito02">Tobias Harris</td>
              <td data-stat="pos">PF</td><td data-stat="age">26</td>
              <td data-stat="team_id">2TM</td><td data-stat="g">82</td>
              <td data-stat="gs">82</td><td data-stat="mp">2847</td><td data-stat="pts">1648</td></tr>
          <tr><th data-stat="ranker">1</th>
              <td data-stat="player" data-append-csv="harrito02">Tobias Harris</td>
              <td data-stat="pos">PF</td><td data-stat="age">26</td>
              <td data-stat="team_id">LAC</td><td data-stat="g">55</td>
              <td data-stat="gs">55</td><td data-stat="mp">1903</td><td data-stat="pts">1148</td></tr>
          <tr class="thead"><th>Rk</th><th>Player</th></tr>
          <tr><th data-stat="ranker">1</th>
              <td data-stat="player" data-append-csv="harrito02">Tobias Harris</td>
              <td data-stat="pos">PF</td><td data-stat="age">26</td>
              <td data-stat="team_id">PHI</td><td data-stat="g">27</td>
              <td data-stat="gs">27</td><td data-stat="mp">944</td><td data-stat="pts"></td></tr>
          <tr class="league_average"><th data-stat="ranker"></th>
              <td data-stat="player">League Average</td><td data-stat="team_id"></td></tr>
        </tbody></table>"#;

    #[test]
    fn excludes_combined_rows_by_default() {
        let html = document(TRADED_PLAYER);
        let totals = parse_season_totals(&html, false).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].team, Some(Team::LosAngelesClippers));
        assert_eq!(totals[1].team, Some(Team::Philadelphia76ers));
        assert!(totals.iter().all(|row| !row.is_combined_totals));
    }

    #[test]
    fn includes_combined_rows_on_request() {
        let html = document(TRADED_PLAYER);
        let totals = parse_season_totals(&html, true).unwrap();
        assert_eq!(totals.len(), 3);
        assert!(totals[0].is_combined_totals);
        assert_eq!(totals[0].team, None);
        assert_eq!(totals[0].stats.points, Some(1648));
    }

    #[test]
    fn blank_stat_cells_are_none() {
        let html = document(TRADED_PLAYER);
        let totals = parse_season_totals(&html, false).unwrap();
        assert_eq!(totals[1].stats.points, None);
        assert_eq!(totals[1].minutes_played, Some(944));
        assert_eq!(totals[1].slug.as_deref(), Some("harrito02"));
    }

    #[test]
    fn missing_table_is_an_error() {
        let html = document("<p>nothing here</p>");
        assert!(matches!(
            parse_season_totals(&html, false),
            Err(ParseError::MissingTable(_))
        ));
    }

    #[test]
    fn parses_advanced_metrics() {
        let html = document(
            r#"<table id="advanced_stats"><tbody>
                <tr><th data-stat="ranker">1</th>
                    <td data-stat="player" data-append-csv="adamsst01">Steven Adams</td>
                    <td data-stat="pos">C</td><td data-stat="team_id">OKC</td>
                    <td data-stat="per">18.5</td><td data-stat="ts_pct">.593</td>
                    <td data-stat="bpm">-0.4</td><td data-stat="vorp"></td></tr>
                <tr><th data-stat="ranker">2</th>
                    <td data-stat="player">Someone Traded</td>
                    <td data-stat="pos">SG</td><td data-stat="team_id">TOT</td></tr>
            </tbody></table>"#,
        );
        let totals = parse_advanced_season_totals(&html, false).unwrap();
        assert_eq!(totals.len(), 1);
        let row = &totals[0];
        assert_eq!(row.team, Some(Team::OklahomaCityThunder));
        assert_eq!(row.player_efficiency_rating, Some(18.5));
        assert_eq!(row.true_shooting_percentage, Some(0.593));
        assert_eq!(row.box_plus_minus, Some(-0.4));
        assert_eq!(row.value_over_replacement_player, None);
    }
}
