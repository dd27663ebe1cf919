use std::collections::HashMap;

use crate::domain::catalog::value_objects::{CanonicalName, EntityKind};

/// Forward map from slug to canonical name for one registry. Built once and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct SlugIndex {
    kind: EntityKind,
    entries: HashMap<String, CanonicalName>,
}

impl SlugIndex {
    /// Colliding names overwrite earlier ones; `Registries::audit` is where
    /// such vocabularies get rejected.
    pub fn build<'a>(kind: EntityKind, names: impl IntoIterator<Item = &'a CanonicalName>) -> Self {
        let entries = names
            .into_iter()
            .map(|name| (kind.slug_for(name.as_str()), name.clone()))
            .collect();
        Self { kind, entries }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn lookup(&self, slug: &str) -> Option<&CanonicalName> {
        self.entries.get(slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
