//! Route shapes of the public site. The domain only knows slugs; the
//! prefixes below are owned here.

use crate::domain::catalog::{EntityKind, PageIdentity};
use crate::domain::content::RelatedEntity;

/// Public identity of the marketing site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    base_url: String,
    name: String,
}

impl SiteSettings {
    pub fn new(base_url: impl Into<String>, name: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self {
            base_url,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn canonical_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub fn hire_path(slug: &str) -> String {
    format!("/hire/{slug}")
}

pub fn country_path(slug: &str) -> String {
    format!("/hire/developers-in/{slug}")
}

pub fn combination_path(technology_slug: &str, country_slug: &str) -> String {
    format!("/hire/{technology_slug}/in/{country_slug}")
}

pub fn apply_path(slug: &str) -> String {
    format!("/apply/{slug}")
}

pub fn identity_path(identity: &PageIdentity) -> String {
    match identity {
        PageIdentity::Technology { slug, .. } | PageIdentity::Role { slug, .. } => hire_path(slug),
        PageIdentity::Country { slug, .. } => country_path(slug),
        PageIdentity::Combination {
            technology_slug,
            country_slug,
            ..
        } => combination_path(technology_slug, country_slug),
    }
}

pub fn related_path(related: &RelatedEntity) -> String {
    let slug = related.kind.slug_for(related.name.as_str());
    match (related.kind, &related.country) {
        (EntityKind::Technology, Some(country)) => {
            combination_path(&slug, &EntityKind::Country.slug_for(country.as_str()))
        }
        (EntityKind::Country, _) => country_path(&slug),
        (EntityKind::Technology | EntityKind::Role, _) => hire_path(&slug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CanonicalName;

    #[test]
    fn canonical_urls_do_not_double_slashes() {
        let site = SiteSettings::new("https://example.com/", "HireMatrix");
        assert_eq!(site.canonical_url("/hire/go-developers"), "https://example.com/hire/go-developers");
    }

    #[test]
    fn path_shapes() {
        assert_eq!(hire_path("react-developers"), "/hire/react-developers");
        assert_eq!(country_path("india"), "/hire/developers-in/india");
        assert_eq!(combination_path("go-developers", "kenya"), "/hire/go-developers/in/kenya");
        assert_eq!(apply_path("qa-engineer"), "/apply/qa-engineer");
    }

    #[test]
    fn related_links_pick_the_right_route() {
        let scoped = RelatedEntity {
            kind: EntityKind::Technology,
            name: CanonicalName::new("Vue.js").unwrap(),
            country: Some(CanonicalName::new("South Africa").unwrap()),
        };
        assert_eq!(related_path(&scoped), "/hire/vuejs-developers/in/south-africa");

        let role = RelatedEntity {
            kind: EntityKind::Role,
            name: CanonicalName::new("QA Engineer").unwrap(),
            country: None,
        };
        assert_eq!(related_path(&role), "/hire/qa-engineer");

        let country = RelatedEntity {
            kind: EntityKind::Country,
            name: CanonicalName::new("Kenya").unwrap(),
            country: None,
        };
        assert_eq!(related_path(&country), "/hire/developers-in/kenya");
    }
}
