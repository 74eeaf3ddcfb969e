//! Catalog aggregation.
//!
//! Each institution contributes one raw JSON document that is supposed to
//! be an array of course objects. [`aggregate`] validates that shape once,
//! at the boundary, and stamps every record with the institution's display
//! name. The matcher downstream can then assume a well-formed
//! `Vec<Course>`.

use serde_json::Value;

use crate::models::Course;

/// One institution's raw catalog, as read from its data file.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    /// Display name stamped onto every course, e.g. `"Leeward Community College"`.
    pub campus: String,
    /// Untrusted JSON. Anything other than an array is treated as empty.
    pub data: Value,
}

impl CatalogSource {
    pub fn new(campus: impl Into<String>, data: Value) -> Self {
        Self {
            campus: campus.into(),
            data,
        }
    }
}

/// Coerces a raw catalog document into its list of elements.
///
/// Objects, `null`, strings and numbers all yield an empty list.
pub fn course_elements(data: Value) -> Vec<Value> {
    match data {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// Converts one raw catalog into courses tagged with `campus`.
pub fn tag_courses(data: Value, campus: &str) -> Vec<Course> {
    course_elements(data)
        .into_iter()
        .map(|element| {
            let mut course = Course::from_value(element);
            course.campus = campus.to_string();
            course
        })
        .collect()
}

/// Concatenates every source's courses in source order.
///
/// Output order is the order of `sources`, then each source's own order.
/// Malformed sources contribute nothing and never fail the aggregation.
pub fn aggregate<I>(sources: I) -> Vec<Course>
where
    I: IntoIterator<Item = CatalogSource>,
{
    sources
        .into_iter()
        .flat_map(|source| tag_courses(source.data, &source.campus))
        .collect()
}
