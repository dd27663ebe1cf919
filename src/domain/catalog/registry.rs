use std::collections::HashMap;

use thiserror::Error;

use crate::domain::catalog::slugify::TECHNOLOGY_SLUG_SUFFIX;
use crate::domain::catalog::value_objects::{CanonicalName, Country, EntityKind, Slug};

/// The three ordered vocabularies. Order is significant: it drives the
/// top-N technology slice, related-role selection and emission order.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    technologies: Vec<CanonicalName>,
    roles: Vec<CanonicalName>,
    countries: Vec<Country>,
}

/// Data-authoring defects found by [`Registries::audit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyIssue {
    #[error("{kind} `{name}` produces malformed slug `{slug}`")]
    MalformedSlug {
        kind: EntityKind,
        name: CanonicalName,
        slug: String,
    },
    #[error("{kind} slug `{slug}` is produced by both `{first}` and `{second}`")]
    SlugCollision {
        kind: EntityKind,
        slug: String,
        first: CanonicalName,
        second: CanonicalName,
    },
    #[error("role `{role}` slug `{slug}` ends with the technology marker")]
    RoleInTechnologyNamespace { role: CanonicalName, slug: String },
    #[error("slug `{slug}` is claimed by technology `{technology}` and role `{role}`")]
    SharedHireSlug {
        slug: String,
        technology: CanonicalName,
        role: CanonicalName,
    },
    #[error("category `{category}` lists unknown technology `{name}`")]
    UnknownCategoryMember { category: String, name: CanonicalName },
}

impl Registries {
    pub fn new(
        technologies: Vec<CanonicalName>,
        roles: Vec<CanonicalName>,
        countries: Vec<Country>,
    ) -> Self {
        Self {
            technologies,
            roles,
            countries,
        }
    }

    pub fn technologies(&self) -> &[CanonicalName] {
        &self.technologies
    }

    pub fn roles(&self) -> &[CanonicalName] {
        &self.roles
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country_names(&self) -> impl Iterator<Item = &CanonicalName> {
        self.countries.iter().map(|country| &country.name)
    }

    pub fn contains_technology(&self, name: &str) -> bool {
        self.technologies.iter().any(|tech| tech == name)
    }

    /// Build-time vocabulary check. Indexes are still built last-write-wins
    /// whatever this reports; callers decide whether issues are fatal.
    pub fn audit(&self) -> Vec<VocabularyIssue> {
        let mut issues = Vec::new();

        let technology_slugs =
            audit_registry(EntityKind::Technology, self.technologies.iter(), &mut issues);
        let role_slugs = audit_registry(EntityKind::Role, self.roles.iter(), &mut issues);
        audit_registry(EntityKind::Country, self.country_names(), &mut issues);

        for role in &self.roles {
            let slug = EntityKind::Role.slug_for(role.as_str());
            if slug.ends_with(TECHNOLOGY_SLUG_SUFFIX) {
                issues.push(VocabularyIssue::RoleInTechnologyNamespace {
                    role: role.clone(),
                    slug,
                });
            }
        }

        for (slug, role) in &role_slugs {
            if let Some(technology) = technology_slugs.get(slug) {
                issues.push(VocabularyIssue::SharedHireSlug {
                    slug: slug.clone(),
                    technology: technology.clone(),
                    role: role.clone(),
                });
            }
        }

        issues
    }
}

fn audit_registry<'a>(
    kind: EntityKind,
    names: impl Iterator<Item = &'a CanonicalName>,
    issues: &mut Vec<VocabularyIssue>,
) -> HashMap<String, CanonicalName> {
    let mut seen: HashMap<String, CanonicalName> = HashMap::new();
    for name in names {
        let slug = kind.slug_for(name.as_str());
        if Slug::new(slug.as_str()).is_err() {
            issues.push(VocabularyIssue::MalformedSlug {
                kind,
                name: name.clone(),
                slug: slug.clone(),
            });
        }
        match seen.get(&slug) {
            Some(first) => issues.push(VocabularyIssue::SlugCollision {
                kind,
                slug,
                first: first.clone(),
                second: name.clone(),
            }),
            None => {
                seen.insert(slug, name.clone());
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<CanonicalName> {
        values.iter().map(|v| CanonicalName::new(*v).unwrap()).collect()
    }

    #[test]
    fn clean_vocabulary_has_no_issues() {
        let registries = Registries::new(
            names(&["React", "C++", "C#"]),
            names(&["Backend Engineer", "QA Engineer"]),
            vec![Country::new("India", "IN").unwrap()],
        );
        assert!(registries.audit().is_empty());
    }

    #[test]
    fn detects_collisions_within_a_registry() {
        let registries = Registries::new(names(&["Vue.js", "VueJS"]), vec![], vec![]);
        let issues = registries.audit();
        assert_eq!(
            issues,
            vec![VocabularyIssue::SlugCollision {
                kind: EntityKind::Technology,
                slug: "vuejs-developers".into(),
                first: CanonicalName::new("Vue.js").unwrap(),
                second: CanonicalName::new("VueJS").unwrap(),
            }]
        );
    }

    #[test]
    fn detects_roles_in_the_technology_namespace() {
        let registries = Registries::new(
            names(&["Salesforce"]),
            names(&["Salesforce Developers"]),
            vec![],
        );
        let issues = registries.audit();
        assert!(issues.contains(&VocabularyIssue::RoleInTechnologyNamespace {
            role: CanonicalName::new("Salesforce Developers").unwrap(),
            slug: "salesforce-developers".into(),
        }));
        assert!(issues.iter().any(|issue| matches!(
            issue,
            VocabularyIssue::SharedHireSlug { slug, .. } if slug == "salesforce-developers"
        )));
    }

    #[test]
    fn detects_degenerate_names() {
        let registries = Registries::new(vec![], vec![], vec![Country::new("???", "XX").unwrap()]);
        assert!(matches!(
            registries.audit().as_slice(),
            [VocabularyIssue::MalformedSlug { kind: EntityKind::Country, .. }]
        ));
    }
}
