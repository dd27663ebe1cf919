mod apply;
mod combination;
mod country;
mod hire;
mod service;

pub use apply::GetApplyPageQuery;
pub use combination::GetCombinationPageQuery;
pub use country::GetCountryPageQuery;
pub use hire::GetHirePageQuery;
pub use service::PageQueryService;
