use crate::domain::catalog::slugify::{slugify, tech_to_slug};
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human readable name of a technology, role or country as it appears in
/// the vocabulary. Never mutated once registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalName(String);

impl CanonicalName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("canonical name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CanonicalName> for String {
    fn from(value: CanonicalName) -> Self {
        value.0
    }
}

impl TryFrom<String> for CanonicalName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<str> for CanonicalName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A URL path segment: lower-case ASCII letters and digits separated by
/// single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !Self::is_well_formed(&value) {
            return Err(DomainError::Validation(format!(
                "slug `{value}` must be lower-case alphanumerics separated by single hyphens"
            )));
        }
        Ok(Self(value))
    }

    /// True for `^[a-z0-9]+(-[a-z0-9]+)*$`: non-empty runs of lower-case
    /// letters and digits joined by single hyphens.
    pub fn is_well_formed(value: &str) -> bool {
        !value.is_empty()
            && value.split('-').all(|part| {
                !part.is_empty()
                    && part
                        .bytes()
                        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Technology,
    Role,
    Country,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Technology => "technology",
            EntityKind::Role => "role",
            EntityKind::Country => "country",
        }
    }

    /// Slug rule of the registry holding this kind. Technologies carry the
    /// `-developers` marker so they can share a URL segment with roles.
    pub fn slug_for(&self, name: &str) -> String {
        match self {
            EntityKind::Technology => tech_to_slug(name),
            EntityKind::Role | EntityKind::Country => slugify(name),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Country record from the vocabulary: canonical name plus ISO 3166-1
/// alpha-2 code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Country {
    pub name: CanonicalName,
    pub code: String,
}

impl Country {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> DomainResult<Self> {
        let name = CanonicalName::new(name)?;
        let code = code.into().trim().to_ascii_uppercase();
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::Validation(format!(
                "country code for {name} must be two ASCII letters"
            )));
        }
        Ok(Self { name, code })
    }

    pub fn slug(&self) -> String {
        EntityKind::Country.slug_for(self.name.as_str())
    }
}
