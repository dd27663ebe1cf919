//! Programmatic SEO content matrix for a recruiting marketplace.
//!
//! Maps technologies, roles and countries to stable URL slugs and back,
//! enumerates every landing page that exists (including technology by
//! country pages) and serves the resulting page content, static
//! generation parameters and sitemap over HTTP.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod startup;
