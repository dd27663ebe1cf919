use crate::domain::catalog::value_objects::{CanonicalName, Country, EntityKind};

/// A (technology, country) pair addressing a two-dimensional page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    pub technology: CanonicalName,
    pub country: CanonicalName,
}

impl Combination {
    pub fn technology_slug(&self) -> String {
        EntityKind::Technology.slug_for(self.technology.as_str())
    }

    pub fn country_slug(&self) -> String {
        EntityKind::Country.slug_for(self.country.as_str())
    }
}

/// Cross product in registry order, technology outer and country inner.
///
/// No capping happens here: callers slice `technologies` beforehand. The
/// result always has `technologies.len() * countries.len()` entries.
pub fn enumerate_combinations(technologies: &[CanonicalName], countries: &[Country]) -> Vec<Combination> {
    technologies
        .iter()
        .flat_map(|technology| {
            countries.iter().map(move |country| Combination {
                technology: technology.clone(),
                country: country.name.clone(),
            })
        })
        .collect()
}
