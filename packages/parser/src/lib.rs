#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Structured extraction for basketball statistics pages.
//!
//! The crate is split in three layers:
//!
//! * [`abbreviations`] and [`time`] translate short codes and clock strings
//!   into domain values.
//! * [`html`] wraps a parsed [`scraper::Html`] document in read-only views,
//!   one per page kind, exposing cells by their stable `data-stat` names.
//! * [`parsers`] consumes those views and emits the normalized records from
//!   [`courtside_stats_models`], applying the row-exclusion and coercion
//!   rules.
//!
//! Nothing here fetches pages. Everything is pure and safe to call
//! concurrently on independent documents.

pub mod abbreviations;
pub mod coerce;
pub mod html;
pub mod parsers;
pub mod time;
pub mod validation;

/// Errors raised while extracting records from markup.
///
/// Missing statistics never produce an error (they become `None`). These
/// variants are reserved for control data that no longer matches the
/// expected markup.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A short code did not match any entry of its lookup table.
    #[error("Unknown {kind} abbreviation: {value:?}")]
    UnknownAbbreviation {
        /// Which table was consulted (e.g. `"team"`).
        kind: &'static str,
        /// The unmatched code.
        value: String,
    },

    /// An outcome cell without a leading `W`/`L` token.
    #[error("Malformed outcome: {0:?}")]
    MalformedOutcome(String),

    /// A play-by-play score cell not shaped like `away-home`.
    #[error("Malformed scores: {0:?}")]
    MalformedScores(String),

    /// A `minutes:seconds` clock string that could not be split.
    #[error("Malformed clock: {0:?}")]
    MalformedClock(String),

    /// A play-by-play period timestamp such as `11:45.0`.
    #[error("Malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    /// A date or time-of-day cell that matched no known layout.
    #[error("Malformed date: {0:?}")]
    MalformedDate(String),

    /// A season label such as `2003-04`.
    #[error("Malformed season: {0:?}")]
    MalformedSeason(String),

    /// The page does not contain the table this parser reads.
    #[error("Missing table: {0}")]
    MissingTable(String),

    /// A row is missing a cell that carries control data.
    #[error("Missing cell: {0}")]
    MissingCell(String),

    /// A runtime-built CSS selector failed to parse.
    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector {
        /// The selector text.
        selector: String,
        /// The selector parser's message.
        message: String,
    },
}
