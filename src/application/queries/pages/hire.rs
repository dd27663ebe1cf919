use super::PageQueryService;
use crate::application::{
    dto::PageContentDto,
    error::{ApplicationError, ApplicationResult},
};

/// `/hire/{slug}` where the slug names a technology or a role.
pub struct GetHirePageQuery {
    pub slug: String,
}

impl PageQueryService {
    pub fn get_hire_page(&self, query: GetHirePageQuery) -> ApplicationResult<PageContentDto> {
        let identity = self
            .catalog
            .resolver()
            .resolve_hire_slug(&query.slug)
            .ok_or_else(|| {
                tracing::debug!(slug = %query.slug, "hire slug did not resolve");
                ApplicationError::not_found("page not found")
            })?;

        Ok(self.render(&identity))
    }
}
