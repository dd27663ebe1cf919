use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::application::site::SiteSettings;
use crate::domain::catalog::Catalog;

/// Exhaustive listings of every page that exists, for static generation
/// and the sitemap. Emits exactly what the catalog resolves, in registry
/// order, with no filtering.
pub struct SurfaceQueryService {
    pub(super) catalog: Arc<Catalog>,
    pub(super) site: SiteSettings,
    pub(super) clock: Arc<dyn Clock>,
}

impl SurfaceQueryService {
    pub fn new(catalog: Arc<Catalog>, site: SiteSettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog,
            site,
            clock,
        }
    }
}
