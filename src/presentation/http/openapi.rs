// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::pages::get_hire_page,
        crate::presentation::http::controllers::pages::get_country_page,
        crate::presentation::http::controllers::pages::get_combination_page,
        crate::presentation::http::controllers::pages::get_apply_page,
        crate::presentation::http::controllers::surfaces::static_params,
        crate::presentation::http::controllers::surfaces::sitemap_paths,
        crate::presentation::http::controllers::surfaces::sitemap_xml,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::PageContentDto,
            crate::application::dto::ApplyPageDto,
            crate::application::dto::BenefitDto,
            crate::application::dto::RelatedLinkDto,
            crate::application::dto::StaticParamsDto,
            crate::application::dto::SlugParamDto,
            crate::application::dto::CombinationParamDto,
            crate::application::dto::SitemapDto
        )
    ),
    tags(
        (name = "Pages", description = "Landing page content resolved from slugs"),
        (name = "Surfaces", description = "Static generation parameters and sitemap"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Hire Matrix API",
        description = "Slug resolution and page enumeration for hiring landing pages",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs` (serving `/openapi.json`) and Redoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
