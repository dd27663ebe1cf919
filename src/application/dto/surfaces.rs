use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{slug}` record consumed by static page generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlugParamDto {
    pub slug: String,
}

/// `{slug, country}` record for technology-in-country pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CombinationParamDto {
    pub slug: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StaticParamsDto {
    pub hire: Vec<SlugParamDto>,
    pub countries: Vec<SlugParamDto>,
    pub combinations: Vec<CombinationParamDto>,
    pub apply: Vec<SlugParamDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SitemapDto {
    pub paths: Vec<String>,
}
