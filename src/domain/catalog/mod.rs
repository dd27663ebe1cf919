//! Canonical entities, their slugs and the page identities derived from them.

pub mod combinations;
pub mod index;
pub mod registry;
pub mod resolver;
pub mod slugify;
pub mod value_objects;

pub use combinations::{Combination, enumerate_combinations};
pub use index::SlugIndex;
pub use registry::{Registries, VocabularyIssue};
pub use resolver::{PageIdentity, SlugResolver};
pub use slugify::{TECHNOLOGY_SLUG_SUFFIX, country_to_slug, role_to_slug, slugify, tech_to_slug};
pub use value_objects::{CanonicalName, Country, EntityKind, Slug};

/// Registries plus everything derived from them once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    registries: Registries,
    resolver: SlugResolver,
    top_technology_limit: usize,
}

impl Catalog {
    pub fn new(registries: Registries, top_technology_limit: usize) -> Self {
        let resolver = SlugResolver::new(&registries);
        Self {
            registries,
            resolver,
            top_technology_limit,
        }
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    pub fn resolver(&self) -> &SlugResolver {
        &self.resolver
    }

    pub fn technology_slugs(&self) -> Vec<String> {
        self.registries
            .technologies()
            .iter()
            .map(|name| tech_to_slug(name.as_str()))
            .collect()
    }

    pub fn role_slugs(&self) -> Vec<String> {
        self.registries
            .roles()
            .iter()
            .map(|name| role_to_slug(name.as_str()))
            .collect()
    }

    pub fn country_slugs(&self) -> Vec<String> {
        self.registries.countries().iter().map(Country::slug).collect()
    }

    /// Curated head of the technology registry used for combination pages.
    pub fn top_technologies(&self) -> &[CanonicalName] {
        let technologies = self.registries.technologies();
        let end = self.top_technology_limit.min(technologies.len());
        &technologies[..end]
    }

    pub fn is_top_technology(&self, name: &CanonicalName) -> bool {
        self.top_technologies().contains(name)
    }

    pub fn combinations(&self) -> Vec<Combination> {
        enumerate_combinations(self.top_technologies(), self.registries.countries())
    }

    pub fn combination_count(&self) -> usize {
        self.top_technologies().len() * self.registries.countries().len()
    }

    /// Resolve `/hire/{tech}/in/{country}`. Only top technologies have
    /// combination pages, so anything else is not found.
    pub fn resolve_combination(&self, technology_slug: &str, country_slug: &str) -> Option<PageIdentity> {
        let technology = self.resolver.resolve_technology(technology_slug)?;
        if !self.is_top_technology(technology) {
            return None;
        }
        let country = self.resolver.resolve_country(country_slug)?;
        Some(PageIdentity::Combination {
            technology: technology.clone(),
            technology_slug: technology_slug.to_string(),
            country: country.clone(),
            country_slug: country_slug.to_string(),
        })
    }

    pub fn resolve_country_page(&self, slug: &str) -> Option<PageIdentity> {
        self.resolver
            .resolve_country(slug)
            .map(|name| PageIdentity::Country {
                name: name.clone(),
                slug: slug.to_string(),
            })
    }

    pub fn find_country(&self, name: &CanonicalName) -> Option<&Country> {
        self.registries
            .countries()
            .iter()
            .find(|country| &country.name == name)
    }
}
