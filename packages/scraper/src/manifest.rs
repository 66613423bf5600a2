//! The list of pages a run fetches.
//!
//! A manifest is JSON, or TOML when the file name ends in `.toml`:
//!
//! ```toml
//! base_url = "https://www.basketball-reference.com"
//! output_dir = "tests/fixtures"
//!
//! [[fixtures]]
//! url = "/leagues/NBA_2020_totals.html"
//! fixture_path = "season_totals/2020.html"
//! validator = "season_totals"
//! ```
//!
//! Relative `url` values are resolved against `base_url`; `fixture_path`
//! is relative to `output_dir`.

use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::Deserialize;

use crate::ManifestError;

/// One page to fetch. Identity is [`WorkItem::source_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Absolute URL.
    pub source_url: String,
    /// Where the page is written, already joined onto the output directory.
    pub destination_path: PathBuf,
    /// Validator to run over the payload before it is written.
    pub validator_id: Option<String>,
}

/// An ordered, resolved list of [`WorkItem`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub items: Vec<WorkItem>,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    base_url: String,
    output_dir: PathBuf,
    #[serde(default)]
    fixtures: Vec<RawFixture>,
}

#[derive(Debug, Deserialize)]
struct RawFixture {
    url: String,
    fixture_path: PathBuf,
    #[serde(default)]
    validator: Option<String>,
}

/// Reads and resolves the manifest at `path`.
///
/// # Errors
///
/// Returns [`ManifestError`] if the file cannot be read, does not parse in
/// the format its extension selects, or contains an unresolvable URL.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let contents = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let manifest = if is_toml {
        Manifest::from_toml(&contents)?
    } else {
        Manifest::from_json(&contents)?
    };

    log::info!(
        "Loaded manifest {} with {} items",
        path.display(),
        manifest.items.len()
    );
    Ok(manifest)
}

impl Manifest {
    /// Parses and resolves a JSON manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Json`] or [`ManifestError::InvalidUrl`].
    pub fn from_json(contents: &str) -> Result<Self, ManifestError> {
        Self::resolve(serde_json::from_str(contents)?)
    }

    /// Parses and resolves a TOML manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Toml`] or [`ManifestError::InvalidUrl`].
    pub fn from_toml(contents: &str) -> Result<Self, ManifestError> {
        Self::resolve(toml::from_str(contents)?)
    }

    fn resolve(raw: RawManifest) -> Result<Self, ManifestError> {
        let base = Url::parse(&raw.base_url).map_err(|e| ManifestError::InvalidUrl {
            url: raw.base_url.clone(),
            message: e.to_string(),
        })?;

        let items = raw
            .fixtures
            .into_iter()
            .map(|fixture| {
                let source_url = base
                    .join(&fixture.url)
                    .map_err(|e| ManifestError::InvalidUrl {
                        url: fixture.url.clone(),
                        message: e.to_string(),
                    })?;
                Ok(WorkItem {
                    source_url: source_url.to_string(),
                    destination_path: raw.output_dir.join(&fixture.fixture_path),
                    validator_id: fixture.validator.filter(|v| !v.trim().is_empty()),
                })
            })
            .collect::<Result<Vec<_>, ManifestError>>()?;

        Ok(Self {
            base_url: raw.base_url,
            output_dir: raw.output_dir,
            items,
        })
    }

    /// The checkpoint location used when none is configured.
    #[must_use]
    pub fn default_checkpoint_path(&self) -> PathBuf {
        self.output_dir.join(".checkpoint.json")
    }
}
