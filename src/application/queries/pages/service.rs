use std::sync::Arc;

use crate::application::dto::PageContentDto;
use crate::application::site::SiteSettings;
use crate::domain::catalog::{Catalog, PageIdentity};
use crate::domain::content::ContentAssembler;

/// Resolves page slugs and assembles their content.
pub struct PageQueryService {
    pub(super) catalog: Arc<Catalog>,
    pub(super) assembler: Arc<ContentAssembler>,
    pub(super) site: SiteSettings,
}

impl PageQueryService {
    pub fn new(catalog: Arc<Catalog>, assembler: Arc<ContentAssembler>, site: SiteSettings) -> Self {
        Self {
            catalog,
            assembler,
            site,
        }
    }

    pub(super) fn render(&self, identity: &PageIdentity) -> PageContentDto {
        let content = self
            .assembler
            .assemble(&self.catalog, identity, self.site.name());
        PageContentDto::from_content(content, &self.site)
    }
}
