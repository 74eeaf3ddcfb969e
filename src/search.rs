use anyhow::Result;
use serde::Serialize;

use course_search_core::matcher;
use course_search_core::models::{Course, NUM_UNITS};
use course_search_core::query::{normalize, SearchParams, EMPTY_QUERY_MESSAGE};

use crate::catalog::{load_catalog, Catalog};
use crate::config::Config;

/// The success envelope returned by the search endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<'a> {
    pub success: bool,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub results: Vec<&'a Course>,
}

/// Normalizes `params` and runs the matcher over `catalog`.
///
/// With no search terms this answers with zero results and an advisory
/// message instead of scanning the catalog.
pub fn search_catalog<'a>(catalog: &'a Catalog, params: &SearchParams) -> SearchResponse<'a> {
    let query = normalize(params);

    if !query.has_terms() {
        return SearchResponse {
            success: true,
            total: 0,
            message: Some(EMPTY_QUERY_MESSAGE),
            results: Vec::new(),
        };
    }

    let outcome = matcher::search(catalog.courses(), &query);
    tracing::debug!(
        terms = query.terms.len(),
        campuses = query.campuses.len(),
        limit = query.limit,
        total = outcome.total,
        "search"
    );

    SearchResponse {
        success: true,
        total: outcome.total,
        message: None,
        results: outcome.results,
    }
}

/// CLI entry point for `course-search search`.
pub fn run_search(
    config: &Config,
    query: Option<String>,
    campus: Vec<String>,
    keyword: Vec<String>,
    limit: Option<String>,
) -> Result<()> {
    let catalog = load_catalog(config);
    let params = SearchParams {
        q: query,
        limit,
        campus,
        keyword,
    };

    let response = search_catalog(&catalog, &params);
    if let Some(message) = response.message {
        println!("{}", message);
        return Ok(());
    }

    if response.results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    println!(
        "total: {} (showing {})",
        response.total,
        response.results.len()
    );
    println!();
    for (i, course) in response.results.iter().enumerate() {
        let id = format!("{} {}", course.prefix(), course.number());
        let id = id.trim();
        let title = course.title();
        println!(
            "{}. {} — {}",
            i + 1,
            if id.is_empty() { "(no id)" } else { id },
            if title.is_empty() { "(untitled)" } else { title.as_ref() }
        );
        if !course.dept().is_empty() {
            println!("    dept: {}", course.dept());
        }
        let units = course.text(NUM_UNITS);
        if !units.is_empty() {
            println!("    units: {}", units);
        }
        println!("    campus: {}", course.campus);
        println!();
    }

    Ok(())
}
