// src/presentation/http/controllers/pages.rs
use crate::application::{
    dto::{ApplyPageDto, PageContentDto},
    queries::pages::{
        GetApplyPageQuery, GetCombinationPageQuery, GetCountryPageQuery, GetHirePageQuery,
    },
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/hire/{slug}",
    params(("slug" = String, Path, description = "Technology slug (ends in `-developers`) or role slug")),
    responses(
        (status = 200, description = "Technology or role landing page.", body = PageContentDto),
        (status = 404, description = "No technology or role has this slug.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn get_hire_page(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PageContentDto>> {
    state
        .services
        .page_queries
        .get_hire_page(GetHirePageQuery { slug })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/hire/developers-in/{slug}",
    params(("slug" = String, Path, description = "Country slug")),
    responses(
        (status = 200, description = "Country landing page.", body = PageContentDto),
        (status = 404, description = "Unknown country.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn get_country_page(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PageContentDto>> {
    state
        .services
        .page_queries
        .get_country_page(GetCountryPageQuery { slug })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/hire/{technology}/in/{country}",
    params(
        ("technology" = String, Path, description = "Technology slug from the top technology list"),
        ("country" = String, Path, description = "Country slug")
    ),
    responses(
        (status = 200, description = "Technology in country landing page.", body = PageContentDto),
        (status = 404, description = "Unknown pair or technology without combination pages.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn get_combination_page(
    Extension(state): Extension<HttpState>,
    Path((technology_slug, country_slug)): Path<(String, String)>,
) -> HttpResult<Json<PageContentDto>> {
    state
        .services
        .page_queries
        .get_combination_page(GetCombinationPageQuery {
            technology_slug,
            country_slug,
        })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/apply/{slug}",
    params(("slug" = String, Path, description = "Technology or role slug")),
    responses(
        (status = 200, description = "Candidate application page.", body = ApplyPageDto),
        (status = 404, description = "No technology or role has this slug.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn get_apply_page(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ApplyPageDto>> {
    state
        .services
        .page_queries
        .get_apply_page(GetApplyPageQuery { slug })
        .into_http()
        .map(Json)
}
