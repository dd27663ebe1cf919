use crate::domain::catalog::{CanonicalName, Country, Registries, VocabularyIssue};

/// Named group of sibling technologies, e.g. `frontend` or `database`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnologyCategory {
    pub name: String,
    pub members: Vec<CanonicalName>,
}

impl TechnologyCategory {
    pub fn new(name: impl Into<String>, members: Vec<CanonicalName>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    pub fn contains(&self, technology: &str) -> bool {
        self.members.iter().any(|member| member == technology)
    }
}

/// Ordered category table with the default sibling list used for
/// technologies that belong to no category.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    categories: Vec<TechnologyCategory>,
    defaults: Vec<CanonicalName>,
}

impl CategoryTable {
    pub fn new(categories: Vec<TechnologyCategory>, defaults: Vec<CanonicalName>) -> Self {
        Self {
            categories,
            defaults,
        }
    }

    pub fn categories(&self) -> &[TechnologyCategory] {
        &self.categories
    }

    pub fn defaults(&self) -> &[CanonicalName] {
        &self.defaults
    }

    /// First declared category listing the technology.
    pub fn category_of(&self, technology: &str) -> Option<&TechnologyCategory> {
        self.categories
            .iter()
            .find(|category| category.contains(technology))
    }

    pub fn related_technologies(&self, technology: &str, limit: usize) -> Vec<CanonicalName> {
        match self.category_of(technology) {
            Some(category) => exclude_self(&category.members, technology, limit),
            None => self.default_siblings(technology, limit),
        }
    }

    /// Fallback siblings. The input is excluded here too since the default
    /// list may well contain it.
    pub fn default_siblings(&self, technology: &str, limit: usize) -> Vec<CanonicalName> {
        exclude_self(&self.defaults, technology, limit)
    }

    /// Category and default entries must name registered technologies.
    pub fn audit(&self, registries: &Registries) -> Vec<VocabularyIssue> {
        let declared = self
            .categories
            .iter()
            .flat_map(|category| category.members.iter().map(move |m| (category.name.as_str(), m)))
            .chain(self.defaults.iter().map(|m| ("default", m)));

        declared
            .filter(|(_, member)| !registries.contains_technology(member.as_str()))
            .map(|(category, member)| VocabularyIssue::UnknownCategoryMember {
                category: category.to_string(),
                name: member.clone(),
            })
            .collect()
    }
}

/// First `limit` candidates in order, skipping `subject`.
pub fn exclude_self(candidates: &[CanonicalName], subject: &str, limit: usize) -> Vec<CanonicalName> {
    candidates
        .iter()
        .filter(|candidate| *candidate != subject)
        .take(limit)
        .cloned()
        .collect()
}

pub fn related_roles(roles: &[CanonicalName], role: &str, limit: usize) -> Vec<CanonicalName> {
    exclude_self(roles, role, limit)
}

pub fn related_countries(countries: &[Country], country: &str, limit: usize) -> Vec<CanonicalName> {
    countries
        .iter()
        .map(|c| &c.name)
        .filter(|name| *name != country)
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<CanonicalName> {
        values.iter().map(|v| CanonicalName::new(*v).unwrap()).collect()
    }

    fn table() -> CategoryTable {
        CategoryTable::new(
            vec![
                TechnologyCategory::new("frontend", names(&["React", "Vue.js", "Angular", "Svelte"])),
                TechnologyCategory::new("backend", names(&["Node.js", "Go", "Rust"])),
            ],
            names(&["React", "Node.js", "Python"]),
        )
    }

    #[test]
    fn siblings_come_from_the_declared_category() {
        let related = table().related_technologies("React", 6);
        assert_eq!(related, names(&["Vue.js", "Angular", "Svelte"]));
    }

    #[test]
    fn siblings_are_capped() {
        let related = table().related_technologies("Go", 1);
        assert_eq!(related, names(&["Node.js"]));
    }

    #[test]
    fn uncategorised_technologies_fall_back_to_defaults() {
        let related = table().related_technologies("Blockchain", 6);
        assert_eq!(related, names(&["React", "Node.js", "Python"]));
    }

    #[test]
    fn fallback_still_excludes_the_input() {
        let table = CategoryTable::new(vec![], names(&["React", "Python"]));
        assert_eq!(table.related_technologies("Python", 6), names(&["React"]));
    }

    #[test]
    fn related_roles_skip_the_input_in_registry_order() {
        let roles = names(&["Frontend Developer", "Backend Engineer", "QA Engineer"]);
        assert_eq!(
            related_roles(&roles, "Backend Engineer", 2),
            names(&["Frontend Developer", "QA Engineer"])
        );
    }

    #[test]
    fn related_countries_skip_the_input() {
        let countries = vec![
            Country::new("India", "IN").unwrap(),
            Country::new("Kenya", "KE").unwrap(),
        ];
        assert_eq!(related_countries(&countries, "India", 5), names(&["Kenya"]));
    }

    #[test]
    fn audit_flags_unknown_members() {
        let registries = Registries::new(names(&["React", "Vue.js", "Angular", "Svelte", "Node.js", "Go"]), vec![], vec![]);
        let issues = table().audit(&registries);
        let unknown: Vec<&str> = issues
            .iter()
            .filter_map(|issue| match issue {
                VocabularyIssue::UnknownCategoryMember { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(unknown, vec!["Rust", "Python"]);
    }
}
