use super::PageQueryService;
use crate::application::{
    dto::ApplyPageDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::content::apply_copy;

/// `/apply/{slug}`; resolves through the same shared segment as hire pages.
pub struct GetApplyPageQuery {
    pub slug: String,
}

impl PageQueryService {
    pub fn get_apply_page(&self, query: GetApplyPageQuery) -> ApplicationResult<ApplyPageDto> {
        let identity = self
            .catalog
            .resolver()
            .resolve_hire_slug(&query.slug)
            .ok_or_else(|| {
                tracing::debug!(slug = %query.slug, "apply slug did not resolve");
                ApplicationError::not_found("page not found")
            })?;

        let copy = apply_copy(&identity, self.site.name());
        Ok(ApplyPageDto::new(&identity, copy, &self.site))
    }
}
