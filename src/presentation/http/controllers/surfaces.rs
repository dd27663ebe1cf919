// src/presentation/http/controllers/surfaces.rs
use crate::application::dto::{SitemapDto, StaticParamsDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::header,
    response::{IntoResponse, Response},
};

pub const SITEMAP_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

#[utoipa::path(
    get,
    path = "/api/v1/static-params",
    responses(
        (status = 200, description = "Every page identity for static generation.", body = StaticParamsDto)
    ),
    tag = "Surfaces"
)]
pub async fn static_params(Extension(state): Extension<HttpState>) -> Json<StaticParamsDto> {
    Json(state.services.surface_queries.static_params())
}

#[utoipa::path(
    get,
    path = "/api/v1/sitemap",
    responses(
        (status = 200, description = "Site-relative paths of every page.", body = SitemapDto)
    ),
    tag = "Surfaces"
)]
pub async fn sitemap_paths(Extension(state): Extension<HttpState>) -> Json<SitemapDto> {
    Json(state.services.surface_queries.sitemap())
}

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses(
        (status = 200, description = "sitemaps.org urlset.", content_type = "application/xml", body = String),
        (status = 500, description = "Sitemap rendering failed.", body = ErrorResponse)
    ),
    tag = "Surfaces"
)]
pub async fn sitemap_xml(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let xml = state.services.surface_queries.sitemap_xml().into_http()?;
    Ok(([(header::CONTENT_TYPE, SITEMAP_CONTENT_TYPE)], xml).into_response())
}
