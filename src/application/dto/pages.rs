use crate::application::site::{self, SiteSettings};
use crate::domain::content::{Benefit, PageContent, PageCopy, RelatedEntity};
use crate::domain::catalog::PageIdentity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BenefitDto {
    pub title: String,
    pub description: String,
}

impl From<Benefit> for BenefitDto {
    fn from(benefit: Benefit) -> Self {
        Self {
            title: benefit.title,
            description: benefit.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelatedLinkDto {
    pub kind: String,
    pub name: String,
    pub path: String,
}

impl From<&RelatedEntity> for RelatedLinkDto {
    fn from(related: &RelatedEntity) -> Self {
        Self {
            kind: related.kind.as_str().to_string(),
            name: related.name.to_string(),
            path: site::related_path(related),
        }
    }
}

/// Everything a landing page needs: identity, metadata and content blocks.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageContentDto {
    /// `technology`, `role`, `country` or `combination`.
    pub kind: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_slug: Option<String>,
    pub path: String,
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub benefits: Vec<BenefitDto>,
    pub related: Vec<RelatedLinkDto>,
}

impl PageContentDto {
    pub fn from_content(content: PageContent, site: &SiteSettings) -> Self {
        let path = site::identity_path(&content.identity);
        let (country, country_slug) = content
            .identity
            .country()
            .map(|(name, slug)| (Some(name.to_string()), Some(slug.to_string())))
            .unwrap_or((None, None));

        Self {
            kind: content.identity.label().to_string(),
            name: content.identity.name().to_string(),
            slug: content.identity.slug().to_string(),
            country,
            country_slug,
            canonical_url: site.canonical_url(&path),
            path,
            title: content.copy.title,
            description: content.copy.description,
            benefits: content.benefits.into_iter().map(Into::into).collect(),
            related: content.related.iter().map(Into::into).collect(),
        }
    }
}

/// Candidate-facing `/apply/{slug}` page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplyPageDto {
    pub kind: String,
    pub name: String,
    pub slug: String,
    pub path: String,
    pub title: String,
    pub description: String,
    pub canonical_url: String,
}

impl ApplyPageDto {
    pub fn new(identity: &PageIdentity, copy: PageCopy, site: &SiteSettings) -> Self {
        let path = site::apply_path(identity.slug());
        Self {
            kind: identity.label().to_string(),
            name: identity.name().to_string(),
            slug: identity.slug().to_string(),
            canonical_url: site.canonical_url(&path),
            path,
            title: copy.title,
            description: copy.description,
        }
    }
}
