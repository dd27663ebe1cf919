// tests/catalog_properties.rs
use std::collections::HashSet;

use hire_matrix_core::domain::catalog::{
    Catalog, EntityKind, PageIdentity, Slug, country_to_slug, enumerate_combinations, role_to_slug,
    slugify, tech_to_slug,
};
use hire_matrix_core::domain::content::{CategoryTable, ContentAssembler, DEFAULT_RELATED_LIMIT};
use proptest::prelude::*;

mod support;

fn embedded_catalog() -> (Catalog, CategoryTable) {
    let vocabulary = support::embedded_vocabulary();
    (Catalog::new(vocabulary.registries, 20), vocabulary.categories)
}

#[test]
fn every_name_round_trips_through_its_own_resolver() {
    let (catalog, _) = embedded_catalog();
    let registries = catalog.registries();
    let resolver = catalog.resolver();

    for tech in registries.technologies() {
        assert_eq!(resolver.resolve_technology(&tech_to_slug(tech.as_str())), Some(tech));
    }
    for role in registries.roles() {
        assert_eq!(resolver.resolve_role(&role_to_slug(role.as_str())), Some(role));
    }
    for country in registries.countries() {
        assert_eq!(
            resolver.resolve_country(&country_to_slug(country.name.as_str())),
            Some(&country.name)
        );
    }
}

#[test]
fn every_slug_is_well_formed() {
    let (catalog, _) = embedded_catalog();
    let slugs = catalog
        .technology_slugs()
        .into_iter()
        .chain(catalog.role_slugs())
        .chain(catalog.country_slugs());
    for slug in slugs {
        assert!(Slug::new(slug.as_str()).is_ok(), "malformed slug {slug:?}");
    }
}

#[test]
fn slugs_are_unique_within_each_registry() {
    let (catalog, _) = embedded_catalog();
    for (kind, slugs) in [
        (EntityKind::Technology, catalog.technology_slugs()),
        (EntityKind::Role, catalog.role_slugs()),
        (EntityKind::Country, catalog.country_slugs()),
    ] {
        let unique: HashSet<&String> = slugs.iter().collect();
        assert_eq!(unique.len(), slugs.len(), "{kind} registry has colliding slugs");
        assert_eq!(catalog.resolver().index(kind).len(), slugs.len());
    }
}

#[test]
fn roles_never_use_the_technology_marker() {
    let (catalog, _) = embedded_catalog();
    for role in catalog.role_slugs() {
        assert!(!role.ends_with("-developers"), "role slug {role} looks like a technology");
    }
    for slug in catalog.role_slugs() {
        let identity = catalog.resolver().resolve_hire_slug(&slug).unwrap();
        assert_eq!(identity.kind(), EntityKind::Role);
    }
}

#[test]
fn related_entities_never_include_the_subject() {
    let (catalog, categories) = embedded_catalog();
    let assembler = ContentAssembler::new(categories, DEFAULT_RELATED_LIMIT);
    let registries = catalog.registries();

    let technologies = registries.technologies().iter().map(|name| PageIdentity::Technology {
        name: name.clone(),
        slug: tech_to_slug(name.as_str()),
    });
    let roles = registries.roles().iter().map(|name| PageIdentity::Role {
        name: name.clone(),
        slug: role_to_slug(name.as_str()),
    });
    let countries = registries.countries().iter().map(|country| PageIdentity::Country {
        name: country.name.clone(),
        slug: country.slug(),
    });

    for identity in technologies.chain(roles).chain(countries) {
        let related = assembler.related(&catalog, &identity);
        assert!(!related.is_empty(), "{} has no related entities", identity.name());
        assert!(related.len() <= DEFAULT_RELATED_LIMIT);
        assert!(
            related.iter().all(|r| &r.name != identity.name()),
            "{} lists itself as related",
            identity.name()
        );
    }
}

#[test]
fn fallback_path_excludes_the_subject() {
    let (_, categories) = embedded_catalog();
    for default in categories.defaults() {
        let siblings = categories.default_siblings(default.as_str(), DEFAULT_RELATED_LIMIT);
        assert!(!siblings.contains(default));
    }
    let uncategorised = categories.related_technologies("WordPress", DEFAULT_RELATED_LIMIT);
    assert!(categories.category_of("WordPress").is_none());
    assert_eq!(uncategorised.first().map(|n| n.as_str()), Some("React"));
}

#[test]
fn react_siblings_come_from_frontend() {
    let (_, categories) = embedded_catalog();
    let related: Vec<String> = categories
        .related_technologies("React", DEFAULT_RELATED_LIMIT)
        .into_iter()
        .map(|n| n.into_inner())
        .collect();
    assert_eq!(
        related,
        vec!["Vue.js", "Angular", "Next.js", "Svelte", "Nuxt.js", "TypeScript"]
    );
}

#[test]
fn concrete_slug_scenarios() {
    assert_eq!(slugify("Node.js"), "nodejs");
    assert_eq!(tech_to_slug("Node.js"), "nodejs-developers");
    assert_eq!(slugify("C++"), "c-plus-plus");
    assert_eq!(tech_to_slug("C++"), "c-plus-plus-developers");

    let (catalog, _) = embedded_catalog();
    let resolver = catalog.resolver();
    assert_eq!(
        resolver.resolve_country(&country_to_slug("South Africa")).map(|n| n.as_str()),
        Some("South Africa")
    );
    assert_eq!(
        resolver.resolve_technology("react-developers").map(|n| n.as_str()),
        Some("React")
    );
    assert!(resolver.resolve_technology("react").is_none());
}

#[test]
fn combination_order_is_technology_major() {
    let registries = support::small_registries();
    let technologies = support::names(&["React", "Go"]);
    let combos: Vec<(String, String)> = enumerate_combinations(&technologies, registries.countries())
        .into_iter()
        .map(|c| (c.technology.to_string(), c.country.to_string()))
        .collect();
    assert_eq!(
        combos,
        vec![
            ("React".into(), "India".into()),
            ("React".into(), "Kenya".into()),
            ("Go".into(), "India".into()),
            ("Go".into(), "Kenya".into()),
        ]
    );
}

proptest! {
    #[test]
    fn combination_size_is_the_product(take in 0usize..60) {
        let (catalog, _) = embedded_catalog();
        let technologies = catalog.registries().technologies();
        let slice = &technologies[..take.min(technologies.len())];
        let countries = catalog.registries().countries();

        let first = enumerate_combinations(slice, countries);
        prop_assert_eq!(first.len(), slice.len() * countries.len());
        prop_assert_eq!(first, enumerate_combinations(slice, countries));
    }

    #[test]
    fn slugify_is_stable(name in "[A-Za-z0-9 .+#/-]{1,24}") {
        prop_assume!(!slugify(&name).is_empty());
        prop_assert_eq!(slugify(&name), slugify(&name));
        prop_assert_eq!(tech_to_slug(&tech_to_slug(&name)), tech_to_slug(&name));
    }
}
