//! Marketing copy, benefit lists and related-entity suggestions for
//! resolved pages.

pub mod benefits;
pub mod metadata;
pub mod related;

pub use benefits::{BENEFITS_PER_PAGE, Benefit, BenefitSubject, benefits_for};
pub use metadata::{PageCopy, apply_copy, hire_copy};
pub use related::{CategoryTable, TechnologyCategory, exclude_self, related_countries, related_roles};

use crate::domain::catalog::{CanonicalName, Catalog, EntityKind, PageIdentity};

pub const DEFAULT_RELATED_LIMIT: usize = 6;

/// A suggested link to another page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedEntity {
    pub kind: EntityKind,
    pub name: CanonicalName,
    /// Set when the link targets a technology's page within a country.
    pub country: Option<CanonicalName>,
}

impl RelatedEntity {
    fn single(kind: EntityKind, name: CanonicalName) -> Self {
        Self {
            kind,
            name,
            country: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageContent {
    pub identity: PageIdentity,
    pub copy: PageCopy,
    pub benefits: Vec<Benefit>,
    pub related: Vec<RelatedEntity>,
}

/// Turns resolved identities into page content. Holds the category table
/// so tests can swap in synthetic data.
#[derive(Debug, Clone)]
pub struct ContentAssembler {
    categories: CategoryTable,
    related_limit: usize,
}

impl ContentAssembler {
    pub fn new(categories: CategoryTable, related_limit: usize) -> Self {
        Self {
            categories,
            related_limit,
        }
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub fn related_limit(&self) -> usize {
        self.related_limit
    }

    pub fn assemble(&self, catalog: &Catalog, identity: &PageIdentity, site_name: &str) -> PageContent {
        PageContent {
            identity: identity.clone(),
            copy: hire_copy(identity, site_name),
            benefits: benefits_for(Self::subject(identity)),
            related: self.related(catalog, identity),
        }
    }

    fn subject(identity: &PageIdentity) -> BenefitSubject<'_> {
        match identity {
            PageIdentity::Technology { name, .. } => BenefitSubject::Technology(name.as_str()),
            PageIdentity::Role { name, .. } => BenefitSubject::Role(name.as_str()),
            PageIdentity::Country { name, .. } => BenefitSubject::Country(name.as_str()),
            PageIdentity::Combination {
                technology,
                country,
                ..
            } => BenefitSubject::TechnologyInCountry {
                technology: technology.as_str(),
                country: country.as_str(),
            },
        }
    }

    pub fn related(&self, catalog: &Catalog, identity: &PageIdentity) -> Vec<RelatedEntity> {
        let registries = catalog.registries();
        match identity {
            PageIdentity::Technology { name, .. } => self
                .categories
                .related_technologies(name.as_str(), self.related_limit)
                .into_iter()
                .map(|sibling| RelatedEntity::single(EntityKind::Technology, sibling))
                .collect(),
            PageIdentity::Role { name, .. } => {
                related_roles(registries.roles(), name.as_str(), self.related_limit)
                    .into_iter()
                    .map(|role| RelatedEntity::single(EntityKind::Role, role))
                    .collect()
            }
            PageIdentity::Country { name, .. } => {
                related_countries(registries.countries(), name.as_str(), self.related_limit)
                    .into_iter()
                    .map(|country| RelatedEntity::single(EntityKind::Country, country))
                    .collect()
            }
            PageIdentity::Combination {
                technology,
                country,
                ..
            } => self
                .categories
                .related_technologies(technology.as_str(), self.related_limit)
                .into_iter()
                .map(|sibling| {
                    let scoped = catalog.is_top_technology(&sibling).then(|| country.clone());
                    RelatedEntity {
                        kind: EntityKind::Technology,
                        name: sibling,
                        country: scoped,
                    }
                })
                .collect(),
        }
    }
}
