use super::PageQueryService;
use crate::application::{
    dto::PageContentDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetCountryPageQuery {
    pub slug: String,
}

impl PageQueryService {
    pub fn get_country_page(&self, query: GetCountryPageQuery) -> ApplicationResult<PageContentDto> {
        let identity = self
            .catalog
            .resolve_country_page(&query.slug)
            .ok_or_else(|| {
                tracing::debug!(slug = %query.slug, "country slug did not resolve");
                ApplicationError::not_found("page not found")
            })?;

        Ok(self.render(&identity))
    }
}
