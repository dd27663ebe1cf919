use crate::domain::catalog::index::SlugIndex;
use crate::domain::catalog::registry::Registries;
use crate::domain::catalog::value_objects::{CanonicalName, EntityKind};

/// A page that exists, together with the slug(s) addressing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageIdentity {
    Technology {
        name: CanonicalName,
        slug: String,
    },
    Role {
        name: CanonicalName,
        slug: String,
    },
    Country {
        name: CanonicalName,
        slug: String,
    },
    Combination {
        technology: CanonicalName,
        technology_slug: String,
        country: CanonicalName,
        country_slug: String,
    },
}

impl PageIdentity {
    /// Kind of the entity the page is primarily about. Combination pages
    /// are technology pages scoped to a country.
    pub fn kind(&self) -> EntityKind {
        match self {
            PageIdentity::Technology { .. } | PageIdentity::Combination { .. } => {
                EntityKind::Technology
            }
            PageIdentity::Role { .. } => EntityKind::Role,
            PageIdentity::Country { .. } => EntityKind::Country,
        }
    }

    /// Page kind as exposed to consumers.
    pub fn label(&self) -> &'static str {
        match self {
            PageIdentity::Combination { .. } => "combination",
            _ => self.kind().as_str(),
        }
    }

    pub fn name(&self) -> &CanonicalName {
        match self {
            PageIdentity::Technology { name, .. }
            | PageIdentity::Role { name, .. }
            | PageIdentity::Country { name, .. } => name,
            PageIdentity::Combination { technology, .. } => technology,
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            PageIdentity::Technology { slug, .. }
            | PageIdentity::Role { slug, .. }
            | PageIdentity::Country { slug, .. } => slug,
            PageIdentity::Combination {
                technology_slug, ..
            } => technology_slug,
        }
    }

    pub fn country(&self) -> Option<(&CanonicalName, &str)> {
        match self {
            PageIdentity::Combination {
                country,
                country_slug,
                ..
            } => Some((country, country_slug)),
            _ => None,
        }
    }
}

/// Maps path segments back to canonical names through the per-registry
/// slug indexes. Unknown slugs resolve to `None`.
#[derive(Debug, Clone)]
pub struct SlugResolver {
    technologies: SlugIndex,
    roles: SlugIndex,
    countries: SlugIndex,
}

impl SlugResolver {
    pub fn new(registries: &Registries) -> Self {
        Self {
            technologies: SlugIndex::build(EntityKind::Technology, registries.technologies()),
            roles: SlugIndex::build(EntityKind::Role, registries.roles()),
            countries: SlugIndex::build(EntityKind::Country, registries.country_names()),
        }
    }

    pub fn resolve_technology(&self, slug: &str) -> Option<&CanonicalName> {
        self.technologies.lookup(slug)
    }

    pub fn resolve_role(&self, slug: &str) -> Option<&CanonicalName> {
        self.roles.lookup(slug)
    }

    pub fn resolve_country(&self, slug: &str) -> Option<&CanonicalName> {
        self.countries.lookup(slug)
    }

    /// Resolve the shared `/hire/{slug}` segment.
    ///
    /// Technology wins over Role when a slug is present in both indexes.
    pub fn resolve_hire_slug(&self, slug: &str) -> Option<PageIdentity> {
        if let Some(name) = self.resolve_technology(slug) {
            return Some(PageIdentity::Technology {
                name: name.clone(),
                slug: slug.to_string(),
            });
        }
        self.resolve_role(slug).map(|name| PageIdentity::Role {
            name: name.clone(),
            slug: slug.to_string(),
        })
    }

    pub fn index(&self, kind: EntityKind) -> &SlugIndex {
        match kind {
            EntityKind::Technology => &self.technologies,
            EntityKind::Role => &self.roles,
            EntityKind::Country => &self.countries,
        }
    }
}
