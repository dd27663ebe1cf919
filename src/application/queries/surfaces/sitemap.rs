use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::SurfaceQueryService;
use crate::application::dto::SitemapDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::site;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

impl SurfaceQueryService {
    /// Site-relative paths of every generated page: hire pages, country
    /// pages, combination pages, then apply pages.
    pub fn sitemap_paths(&self) -> Vec<String> {
        let hire = self.hire_params().into_iter().map(|p| site::hire_path(&p.slug));
        let countries = self
            .country_params()
            .into_iter()
            .map(|p| site::country_path(&p.slug));
        let combinations = self
            .combination_params()
            .into_iter()
            .map(|p| site::combination_path(&p.slug, &p.country));
        let apply = self
            .apply_params()
            .into_iter()
            .map(|p| site::apply_path(&p.slug));

        hire.chain(countries).chain(combinations).chain(apply).collect()
    }

    pub fn sitemap(&self) -> SitemapDto {
        SitemapDto {
            paths: self.sitemap_paths(),
        }
    }

    /// sitemaps.org `urlset` with absolute locations and today's date as
    /// `lastmod`.
    pub fn sitemap_xml(&self) -> ApplicationResult<String> {
        let paths = self.sitemap_paths();
        let lastmod = self.clock.now().format("%Y-%m-%d").to_string();

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
        writer.write_event(Event::Start(urlset)).map_err(xml_error)?;

        for path in &paths {
            writer
                .write_event(Event::Start(BytesStart::new("url")))
                .map_err(xml_error)?;
            write_text_element(&mut writer, "loc", &self.site.canonical_url(path))?;
            write_text_element(&mut writer, "lastmod", &lastmod)?;
            writer
                .write_event(Event::End(BytesEnd::new("url")))
                .map_err(xml_error)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("urlset")))
            .map_err(xml_error)?;

        tracing::debug!(urls = paths.len(), "sitemap rendered");
        String::from_utf8(writer.into_inner()).map_err(xml_error)
    }
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> ApplicationResult<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)?;
    Ok(())
}

fn xml_error(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::infrastructure(format!("sitemap rendering failed: {err}"))
}
