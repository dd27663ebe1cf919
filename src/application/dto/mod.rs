pub mod pages;
pub mod surfaces;

pub use pages::{ApplyPageDto, BenefitDto, PageContentDto, RelatedLinkDto};
pub use surfaces::{CombinationParamDto, SitemapDto, SlugParamDto, StaticParamsDto};
