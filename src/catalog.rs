//! Loading institution catalogs from disk.
//!
//! Every configured campus file is read once at startup and handed to
//! [`course_search_core::catalog::aggregate`]. A missing or unparseable
//! file is logged and treated as an empty catalog so one bad file never
//! takes the service down.

use std::path::Path;
use std::sync::Arc;

use course_search_core::catalog::{aggregate, CatalogSource};
use course_search_core::models::Course;
use serde_json::Value;

use crate::config::Config;

/// The aggregated, read-only course collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Arc<Vec<Course>>,
    counts: Vec<(String, usize)>,
}

impl Catalog {
    /// Aggregates `sources` in order.
    pub fn from_sources(sources: Vec<CatalogSource>) -> Self {
        let names: Vec<String> = sources.iter().map(|s| s.campus.clone()).collect();
        let courses = aggregate(sources);
        let counts = names
            .into_iter()
            .map(|name| {
                let n = courses.iter().filter(|c| c.campus == name).count();
                (name, n)
            })
            .collect();

        Self {
            courses: Arc::new(courses),
            counts,
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Campus display name and course count, in aggregation order.
    pub fn campus_counts(&self) -> &[(String, usize)] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Reads every configured campus file and aggregates them.
pub fn load_catalog(config: &Config) -> Catalog {
    let sources = config
        .catalog
        .campuses
        .iter()
        .map(|campus| {
            let path = config.catalog.path_for(campus);
            CatalogSource::new(campus.name.trim(), read_source(&path))
        })
        .collect();

    let catalog = Catalog::from_sources(sources);
    for (campus, count) in catalog.campus_counts() {
        tracing::info!(campus = %campus, courses = count, "catalog loaded");
    }
    tracing::info!(total = catalog.len(), "catalog ready");
    catalog
}

/// Reads one catalog file as JSON, substituting `null` on any failure.
pub fn read_source(path: &Path) -> Value {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "catalog file unreadable; using empty catalog");
            return Value::Null;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "catalog file is not valid JSON; using empty catalog");
            Value::Null
        }
    }
}
