// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the sitemap `lastmod` stamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
