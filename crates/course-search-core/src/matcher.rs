//! The course matcher.
//!
//! A course matches when it passes the campus filter and at least one
//! search term is a substring of its lowercased title, department, or
//! identifier (`"<prefix> <number>"`). There is no scoring: results come
//! back in catalog order, truncated to the requested limit, alongside the
//! total number of matches before truncation.

use serde::Serialize;
use std::collections::HashSet;

use crate::models::Course;
use crate::query::SearchQuery;

/// Matches for one query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome<'a> {
    /// Number of matching courses before truncation.
    pub total: usize,
    /// The first `limit` matches, in catalog order.
    pub results: Vec<&'a Course>,
}

/// Lowercased `"<prefix> <number>"`, trimmed. Empty when both are missing.
pub fn course_identifier(course: &Course) -> String {
    format!("{} {}", course.prefix(), course.number())
        .trim()
        .to_lowercase()
}

/// Exact, case- and whitespace-insensitive campus membership.
///
/// An empty filter set lets every course through.
pub fn matches_campus(course: &Course, campuses: &HashSet<String>) -> bool {
    campuses.is_empty() || campuses.contains(course.campus.to_lowercase().trim())
}

/// True if any non-empty term is contained in the title, the department,
/// or the non-empty identifier.
pub fn matches_terms(course: &Course, terms: &[String]) -> bool {
    let title = course.title().to_lowercase();
    let dept = course.dept().to_lowercase();
    let id = course_identifier(course);

    terms.iter().any(|term| {
        !term.is_empty()
            && (title.contains(term.as_str())
                || dept.contains(term.as_str())
                || (!id.is_empty() && id.contains(term.as_str())))
    })
}

/// Filters `courses` by `query` and truncates to `query.limit`.
pub fn search<'a>(courses: &'a [Course], query: &SearchQuery) -> SearchOutcome<'a> {
    let matched: Vec<&Course> = courses
        .iter()
        .filter(|course| matches_campus(course, &query.campuses))
        .filter(|course| matches_terms(course, &query.terms))
        .collect();

    let total = matched.len();
    let mut results = matched;
    results.truncate(query.limit);

    SearchOutcome { total, results }
}
