mod sitemap;
mod service;
mod static_params;

pub use service::SurfaceQueryService;
pub use sitemap::SITEMAP_NAMESPACE;
