// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::time::Clock,
        queries::{pages::PageQueryService, surfaces::SurfaceQueryService},
        site::SiteSettings,
    },
    domain::{catalog::Catalog, content::ContentAssembler},
};

pub struct ApplicationServices {
    pub page_queries: Arc<PageQueryService>,
    pub surface_queries: Arc<SurfaceQueryService>,
    catalog: Arc<Catalog>,
}

impl ApplicationServices {
    pub fn new(
        catalog: Arc<Catalog>,
        assembler: Arc<ContentAssembler>,
        site: SiteSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let page_queries = Arc::new(PageQueryService::new(
            Arc::clone(&catalog),
            Arc::clone(&assembler),
            site.clone(),
        ));
        let surface_queries = Arc::new(SurfaceQueryService::new(
            Arc::clone(&catalog),
            site,
            clock,
        ));

        Self {
            page_queries,
            surface_queries,
            catalog,
        }
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }
}
