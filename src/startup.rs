//! Wiring shared by the server and the exporters: load the vocabulary,
//! audit it, and build the application services.

use std::sync::Arc;

use thiserror::Error;

use crate::application::{ports::time::Clock, services::ApplicationServices, site::SiteSettings};
use crate::config::AppConfig;
use crate::domain::catalog::{Catalog, VocabularyIssue};
use crate::domain::content::ContentAssembler;
use crate::infrastructure::vocabulary::{self, Vocabulary, VocabularyError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
    #[error("vocabulary audit reported {} issue(s)", .0.len())]
    Audit(Vec<VocabularyIssue>),
}

/// Log every audit issue and fail when `strict` is set.
pub fn check_vocabulary(vocabulary: &Vocabulary, strict: bool) -> Result<(), StartupError> {
    let issues = vocabulary.audit();
    if issues.is_empty() {
        return Ok(());
    }

    for issue in &issues {
        if strict {
            tracing::error!(%issue, "vocabulary issue");
        } else {
            tracing::warn!(%issue, "vocabulary issue");
        }
    }

    if strict {
        Err(StartupError::Audit(issues))
    } else {
        Ok(())
    }
}

pub fn build_services_from(
    vocabulary: Vocabulary,
    config: &AppConfig,
    clock: Arc<dyn Clock>,
) -> Result<ApplicationServices, StartupError> {
    check_vocabulary(&vocabulary, config.strict_vocabulary())?;

    let catalog = Catalog::new(vocabulary.registries, config.top_technology_limit());
    tracing::info!(
        technologies = catalog.registries().technologies().len(),
        roles = catalog.registries().roles().len(),
        countries = catalog.registries().countries().len(),
        top_technologies = catalog.top_technologies().len(),
        combinations = catalog.combination_count(),
        "catalog ready"
    );

    let assembler = ContentAssembler::new(vocabulary.categories, config.related_limit());
    let site = SiteSettings::new(config.site_url(), config.site_name());

    Ok(ApplicationServices::new(
        Arc::new(catalog),
        Arc::new(assembler),
        site,
        clock,
    ))
}

pub fn build_services(
    config: &AppConfig,
    clock: Arc<dyn Clock>,
) -> Result<ApplicationServices, StartupError> {
    let vocabulary = vocabulary::load_vocabulary(config.vocabulary_path())?;
    build_services_from(vocabulary, config, clock)
}
