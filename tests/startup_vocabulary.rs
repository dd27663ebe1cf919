// tests/startup_vocabulary.rs
use std::sync::Arc;

use hire_matrix_core::application::ports::time::Clock;
use hire_matrix_core::config::AppConfig;
use hire_matrix_core::domain::catalog::{EntityKind, VocabularyIssue};
use hire_matrix_core::infrastructure::time::FixedClock;
use hire_matrix_core::infrastructure::vocabulary::parse_vocabulary;
use hire_matrix_core::startup::{self, StartupError};

mod support;

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(support::fixed_now()))
}

#[test]
fn strict_startup_rejects_colliding_vocabulary() {
    let vocabulary = parse_vocabulary(support::COLLIDING_VOCABULARY).unwrap();
    let result = startup::build_services_from(vocabulary, &AppConfig::default(), clock());

    match result {
        Err(StartupError::Audit(issues)) => {
            assert!(issues.iter().any(|issue| matches!(
                issue,
                VocabularyIssue::SlugCollision { kind: EntityKind::Technology, slug, .. }
                    if slug == "vuejs-developers"
            )));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("colliding vocabulary must be rejected"),
    }
}

#[test]
fn lenient_startup_keeps_the_last_colliding_name() {
    let vocabulary = parse_vocabulary(support::COLLIDING_VOCABULARY).unwrap();
    let config =
        AppConfig::from_lookup(|key| (key == "STRICT_VOCABULARY").then(|| "false".to_string()))
            .unwrap();
    let services = startup::build_services_from(vocabulary, &config, clock()).unwrap();

    let catalog = services.catalog();
    let resolved = catalog.resolver().resolve_technology("vuejs-developers").unwrap();
    assert_eq!(resolved.as_str(), "VueJS");
}

#[test]
fn top_technology_limit_bounds_combinations() {
    let config =
        AppConfig::from_lookup(|key| (key == "TOP_TECHNOLOGY_LIMIT").then(|| "3".to_string()))
            .unwrap();
    let services =
        startup::build_services_from(support::embedded_vocabulary(), &config, clock()).unwrap();
    let catalog = services.catalog();

    assert_eq!(catalog.top_technologies().len(), 3);
    assert_eq!(
        services.surface_queries.combination_params().len(),
        3 * catalog.registries().countries().len()
    );
}

#[test]
fn site_settings_flow_into_canonical_urls() {
    let config = AppConfig::from_lookup(|key| match key {
        "SITE_URL" => Some("https://hire.example.com/".to_string()),
        "SITE_NAME" => Some("Example".to_string()),
        _ => None,
    })
    .unwrap();
    let services =
        startup::build_services_from(support::embedded_vocabulary(), &config, clock()).unwrap();

    let page = services
        .page_queries
        .get_hire_page(hire_matrix_core::application::queries::pages::GetHirePageQuery {
            slug: "go-developers".into(),
        })
        .unwrap();
    assert_eq!(page.canonical_url, "https://hire.example.com/hire/go-developers");
    assert_eq!(page.title, "Hire Go Developers | Example");
}

#[test]
fn check_vocabulary_only_fails_when_strict() {
    let vocabulary = parse_vocabulary(support::COLLIDING_VOCABULARY).unwrap();
    assert!(startup::check_vocabulary(&vocabulary, false).is_ok());
    let err = startup::check_vocabulary(&vocabulary, true).unwrap_err();
    assert!(err.to_string().starts_with("vocabulary audit reported"));

    assert!(startup::check_vocabulary(&support::embedded_vocabulary(), true).is_ok());
}

#[test]
fn forced_strict_mode_overrides_a_lenient_environment() {
    let config =
        AppConfig::from_lookup(|key| (key == "STRICT_VOCABULARY").then(|| "no".to_string()))
            .unwrap()
            .with_strict_vocabulary(true);
    let vocabulary = parse_vocabulary(support::COLLIDING_VOCABULARY).unwrap();

    let result = startup::build_services_from(vocabulary, &config, clock());
    assert!(matches!(result, Err(StartupError::Audit(_))));
}
