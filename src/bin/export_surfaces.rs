// src/bin/export_surfaces.rs
//! Writes the static generation parameters and sitemap to disk for the
//! site build.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use hire_matrix_core::{
    application::ports::time::Clock,
    config::AppConfig,
    infrastructure::time::{FixedClock, SystemClock},
    startup,
};
use std::{env, fs, path::PathBuf, sync::Arc};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .init();

    // Audit issues always abort an export.
    let config = AppConfig::from_env()?.with_strict_vocabulary(true);
    let output_dir = PathBuf::from(env::var("EXPORT_DIR").unwrap_or_else(|_| "dist".to_string()));

    // EXPORT_LASTMOD pins the sitemap `lastmod` date.
    let clock: Arc<dyn Clock> = match env::var("EXPORT_LASTMOD") {
        Ok(value) => {
            let instant = DateTime::parse_from_rfc3339(&value)
                .with_context(|| format!("EXPORT_LASTMOD `{value}` is not RFC 3339"))?
                .with_timezone(&Utc);
            Arc::new(FixedClock(instant))
        }
        Err(_) => Arc::new(SystemClock),
    };

    let services = startup::build_services(&config, clock)?;
    let surfaces = &services.surface_queries;

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    let static_params = serde_json::to_string_pretty(&surfaces.static_params())?;
    fs::write(output_dir.join("static-params.json"), static_params)?;

    let sitemap = serde_json::to_string_pretty(&surfaces.sitemap())?;
    fs::write(output_dir.join("sitemap-paths.json"), sitemap)?;

    fs::write(output_dir.join("sitemap.xml"), surfaces.sitemap_xml()?)?;

    tracing::info!(dir = %output_dir.display(), "surfaces exported");
    Ok(())
}
