//! `courtside extract`: run a record parser over a saved page.

use std::io::Write as _;
use std::path::PathBuf;

use chrono_tz::Tz;
use clap::{Args, ValueEnum};
use courtside_parser::parsers::{
    box_score, game_log, history, play_by_play, roster, schedule, search, season_totals, standings,
};
use scraper::Html;
use serde::Serialize;

/// Page kinds `extract` understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageKind {
    BoxScore,
    SeasonTotals,
    AdvancedTotals,
    GameLog,
    Schedule,
    PlayByPlay,
    Standings,
    Search,
    Roster,
    Executive,
    Referee,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Kind of page stored in the file
    #[arg(long, value_enum)]
    pub kind: PageKind,
    /// Saved HTML page
    #[arg(long)]
    pub file: PathBuf,
    /// Keep combined-team (`2TM`, `TOT`) rows in season totals
    #[arg(long)]
    pub include_combined: bool,
    /// Keep games the player did not play in game logs
    #[arg(long)]
    pub include_inactive: bool,
    /// IANA zone schedule start times are converted to
    #[arg(long, default_value = "America/New_York")]
    pub timezone: String,
}

/// Parses the file and prints one JSON record per line to stdout.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the timezone is unknown,
/// the page does not match its kind, or stdout is closed.
pub fn run(args: &ExtractArgs) -> Result<usize, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(&args.file)?;
    let document = Html::parse_document(&contents);
    log::debug!("Extracting {:?} from {}", args.kind, args.file.display());

    let lines = match args.kind {
        PageKind::BoxScore => to_lines(&[box_score::parse_box_score(&document)?])?,
        PageKind::SeasonTotals => to_lines(&season_totals::parse_season_totals(
            &document,
            args.include_combined,
        )?)?,
        PageKind::AdvancedTotals => to_lines(&season_totals::parse_advanced_season_totals(
            &document,
            args.include_combined,
        )?)?,
        PageKind::GameLog => to_lines(&game_log::parse_game_log(
            &document,
            args.include_inactive,
        )?)?,
        PageKind::Schedule => {
            let timezone = args
                .timezone
                .parse::<Tz>()
                .map_err(|e| format!("Unknown timezone {:?}: {e}", args.timezone))?;
            to_lines(&schedule::parse_schedule(&document, timezone)?)?
        }
        PageKind::PlayByPlay => to_lines(&play_by_play::parse_play_by_play(&document)?)?,
        PageKind::Standings => to_lines(&standings::parse_standings(&document)?)?,
        PageKind::Search => to_lines(&search::parse_search_results(&document)?)?,
        PageKind::Roster => to_lines(&roster::parse_roster(&document)?)?,
        PageKind::Executive => to_lines(&history::parse_executive_history(&document)?)?,
        PageKind::Referee => to_lines(&history::parse_referee_history(&document)?)?,
    };

    let mut stdout = std::io::stdout().lock();
    for line in &lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(lines.len())
}

fn to_lines<T: Serialize>(records: &[T]) -> Result<Vec<String>, serde_json::Error> {
    records.iter().map(serde_json::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_one_line_per_record() {
        #[derive(Serialize)]
        struct Row {
            slug: &'static str,
        }
        let lines = to_lines(&[Row { slug: "jamesle01" }, Row { slug: "duranke01" }]).unwrap();
        assert_eq!(lines, vec![r#"{"slug":"jamesle01"}"#, r#"{"slug":"duranke01"}"#]);
    }

    #[test]
    fn extracts_search_results_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("search.html");
        std::fs::write(
            &file,
            r#"<html><body><div id="players">
                <div class="search-item">
                    <div class="search-item-name"><strong><a href="/players/j/jamesle01.html">LeBron James (2004-2024)</a></strong></div>
                    <div class="search-item-league">NBA</div>
                </div>
            </div></body></html>"#,
        )
        .unwrap();

        let args = ExtractArgs {
            kind: PageKind::Search,
            file,
            include_combined: false,
            include_inactive: false,
            timezone: "America/New_York".to_owned(),
        };
        assert_eq!(run(&args).unwrap(), 1);
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("schedule.html");
        std::fs::write(&file, "<html></html>").unwrap();
        let args = ExtractArgs {
            kind: PageKind::Schedule,
            file,
            include_combined: false,
            include_inactive: false,
            timezone: "Mars/Olympus_Mons".to_owned(),
        };
        let error = run(&args).unwrap_err();
        assert!(error.to_string().contains("Unknown timezone"));
    }
}
