use super::PageQueryService;
use crate::application::{
    dto::PageContentDto,
    error::{ApplicationError, ApplicationResult},
};

/// `/hire/{technology}/in/{country}`.
pub struct GetCombinationPageQuery {
    pub technology_slug: String,
    pub country_slug: String,
}

impl PageQueryService {
    pub fn get_combination_page(
        &self,
        query: GetCombinationPageQuery,
    ) -> ApplicationResult<PageContentDto> {
        let identity = self
            .catalog
            .resolve_combination(&query.technology_slug, &query.country_slug)
            .ok_or_else(|| {
                tracing::debug!(
                    technology = %query.technology_slug,
                    country = %query.country_slug,
                    "combination did not resolve"
                );
                ApplicationError::not_found("page not found")
            })?;

        Ok(self.render(&identity))
    }
}
