//! Player search results.

use courtside_stats_models::PlayerSearchResult;
use scraper::Html;

use crate::{ParseError, abbreviations::league_from_abbreviation, html::search::SearchPage};

/// Parses the player hits of a search results page. A page without a
/// players section yields no results.
///
/// # Errors
///
/// Returns [`ParseError::UnknownAbbreviation`] for an unrecognized league.
pub fn parse_search_results(document: &Html) -> Result<Vec<PlayerSearchResult>, ParseError> {
    let results = SearchPage::new(document)
        .player_results()
        .iter()
        .map(|item| -> Result<PlayerSearchResult, ParseError> {
            Ok(PlayerSearchResult {
                name: item.name(),
                slug: item.slug(),
                leagues: item
                    .league_abbreviations()
                    .iter()
                    .map(|league| league_from_abbreviation(league))
                    .collect::<Result<Vec<_>, _>>()?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Parsed {} player search results", results.len());
    Ok(results)
}

/// The href of the next results page, when the search is paginated.
#[must_use]
pub fn next_search_page(document: &Html) -> Option<String> {
    SearchPage::new(document).next_page_url()
}
