//! Loads the static vocabulary (technologies, roles, countries and the
//! related-technology categories) from JSON.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::catalog::{CanonicalName, Country, Registries, VocabularyIssue};
use crate::domain::content::{CategoryTable, TechnologyCategory};
use crate::domain::errors::DomainError;

/// Vocabulary shipped with the crate, used when no file is configured.
pub const EMBEDDED_VOCABULARY: &str = include_str!("../../data/vocabulary.json");

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid vocabulary json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid vocabulary entry: {0}")]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Deserialize)]
struct VocabularyFile {
    technologies: Vec<CanonicalName>,
    roles: Vec<CanonicalName>,
    countries: Vec<CountryRecord>,
    #[serde(default)]
    categories: Vec<CategoryRecord>,
    #[serde(default)]
    default_related: Vec<CanonicalName>,
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: String,
    code: String,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    name: String,
    members: Vec<CanonicalName>,
}

#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub registries: Registries,
    pub categories: CategoryTable,
}

impl Vocabulary {
    /// Registry audit plus category table consistency.
    pub fn audit(&self) -> Vec<VocabularyIssue> {
        let mut issues = self.registries.audit();
        issues.extend(self.categories.audit(&self.registries));
        issues
    }
}

pub fn parse_vocabulary(json: &str) -> Result<Vocabulary, VocabularyError> {
    let file: VocabularyFile = serde_json::from_str(json)?;

    let countries = file
        .countries
        .into_iter()
        .map(|record| Country::new(record.name, record.code))
        .collect::<Result<Vec<_>, _>>()?;

    let categories = file
        .categories
        .into_iter()
        .map(|record| TechnologyCategory::new(record.name, record.members))
        .collect();

    Ok(Vocabulary {
        registries: Registries::new(file.technologies, file.roles, countries),
        categories: CategoryTable::new(categories, file.default_related),
    })
}

/// Read the vocabulary from `path`, or fall back to the embedded copy.
pub fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary, VocabularyError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "loading vocabulary from file");
            parse_vocabulary(&json)
        }
        None => {
            tracing::info!("loading embedded vocabulary");
            parse_vocabulary(EMBEDDED_VOCABULARY)
        }
    }
}
