use super::SurfaceQueryService;
use crate::application::dto::{CombinationParamDto, SlugParamDto, StaticParamsDto};

impl SurfaceQueryService {
    /// Technology slugs followed by role slugs: the shared `/hire/{slug}`
    /// segment.
    pub fn hire_params(&self) -> Vec<SlugParamDto> {
        self.catalog
            .technology_slugs()
            .into_iter()
            .chain(self.catalog.role_slugs())
            .map(|slug| SlugParamDto { slug })
            .collect()
    }

    pub fn country_params(&self) -> Vec<SlugParamDto> {
        self.catalog
            .country_slugs()
            .into_iter()
            .map(|slug| SlugParamDto { slug })
            .collect()
    }

    pub fn combination_params(&self) -> Vec<CombinationParamDto> {
        self.catalog
            .combinations()
            .iter()
            .map(|combination| CombinationParamDto {
                slug: combination.technology_slug(),
                country: combination.country_slug(),
            })
            .collect()
    }

    /// Apply pages exist for the same identities as `/hire/{slug}`.
    pub fn apply_params(&self) -> Vec<SlugParamDto> {
        self.hire_params()
    }

    pub fn static_params(&self) -> StaticParamsDto {
        StaticParamsDto {
            hire: self.hire_params(),
            countries: self.country_params(),
            combinations: self.combination_params(),
            apply: self.apply_params(),
        }
    }
}
