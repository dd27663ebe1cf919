// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

use crate::domain::content::DEFAULT_RELATED_LIMIT;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    site_url: String,
    site_name: String,
    vocabulary_path: Option<PathBuf>,
    top_technology_limit: usize,
    related_limit: usize,
    strict_vocabulary: bool,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_site_url() -> String {
    "http://localhost:3000".into()
}

fn default_site_name() -> String {
    "HireMatrix".into()
}

fn default_top_technology_limit() -> usize {
    20
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!("{key} must be a boolean"))),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            site_url: default_site_url(),
            site_name: default_site_name(),
            vocabulary_path: None,
            top_technology_limit: default_top_technology_limit(),
            related_limit: DEFAULT_RELATED_LIMIT,
            strict_vocabulary: true,
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let site_url = lookup("SITE_URL").unwrap_or_else(default_site_url);
        if !(site_url.starts_with("http://") || site_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(
                "SITE_URL must be an absolute http(s) URL".into(),
            ));
        }
        let site_name = lookup("SITE_NAME")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_site_name);

        let vocabulary_path = lookup("VOCABULARY_PATH")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let top_technology_limit = lookup("TOP_TECHNOLOGY_LIMIT")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or_else(default_top_technology_limit);

        let related_limit = lookup("RELATED_LIMIT")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_RELATED_LIMIT);

        let strict_vocabulary = lookup("STRICT_VOCABULARY")
            .map(|v| parse_flag("STRICT_VOCABULARY", &v))
            .transpose()?
            .unwrap_or(true);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            site_url,
            site_name,
            vocabulary_path,
            top_technology_limit,
            related_limit,
            strict_vocabulary,
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// `None` means the embedded vocabulary.
    pub fn vocabulary_path(&self) -> Option<&std::path::Path> {
        self.vocabulary_path.as_deref()
    }

    pub fn top_technology_limit(&self) -> usize {
        self.top_technology_limit
    }

    pub fn related_limit(&self) -> usize {
        self.related_limit
    }

    /// Whether vocabulary audit issues abort startup.
    pub fn strict_vocabulary(&self) -> bool {
        self.strict_vocabulary
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Override the vocabulary audit mode read from the environment.
    pub fn with_strict_vocabulary(mut self, strict: bool) -> Self {
        self.strict_vocabulary = strict;
        self
    }
}
