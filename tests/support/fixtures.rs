// tests/support/fixtures.rs
use chrono::{DateTime, Utc};
use hire_matrix_core::domain::catalog::{CanonicalName, Country, Registries};
use hire_matrix_core::infrastructure::vocabulary::{EMBEDDED_VOCABULARY, Vocabulary, parse_vocabulary};
use once_cell::sync::Lazy;

/// Fixed timestamp used as the sitemap `lastmod`.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/fixtures.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub fn embedded_vocabulary() -> Vocabulary {
    parse_vocabulary(EMBEDDED_VOCABULARY).expect("embedded vocabulary parses")
}

pub fn names(values: &[&str]) -> Vec<CanonicalName> {
    values
        .iter()
        .map(|v| CanonicalName::new(*v).expect("valid canonical name"))
        .collect()
}

/// Small synthetic vocabulary used where the real one is too large to
/// reason about.
pub fn small_registries() -> Registries {
    Registries::new(
        names(&["React", "Go", "C++"]),
        names(&["Backend Engineer", "QA Engineer"]),
        vec![
            Country::new("India", "IN").expect("country"),
            Country::new("Kenya", "KE").expect("country"),
        ],
    )
}

/// Vocabulary whose technology registry has two names sharing a slug.
pub const COLLIDING_VOCABULARY: &str = r#"{
    "technologies": ["Vue.js", "VueJS"],
    "roles": ["QA Engineer"],
    "countries": [{ "name": "India", "code": "IN" }]
}"#;
