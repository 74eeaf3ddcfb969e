//! Query normalization.
//!
//! Turns raw request parameters into a [`SearchQuery`]: the ordered list
//! of search terms, the campus filter set, and a bounded result limit.
//! Nothing here fails; bad input falls back to defaults.

use std::collections::HashSet;

/// Limit used when `limit` is absent or invalid.
pub const DEFAULT_LIMIT: usize = 20;
/// Upper bound applied to any requested limit.
pub const MAX_LIMIT: usize = 200;
/// Advisory returned in place of results when no search term was given.
pub const EMPTY_QUERY_MESSAGE: &str = "Please include a search query (e.g., ?q=data)";

/// Raw, un-normalized request parameters.
///
/// `campus` and `keyword` may repeat and may hold comma-separated lists;
/// `q` and `limit` are single-valued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<String>,
    pub campus: Vec<String>,
    pub keyword: Vec<String>,
}

impl SearchParams {
    /// Collects parameters from decoded query-string pairs.
    ///
    /// The first `q` and the first `limit` win; every `campus` and
    /// `keyword` occurrence is kept in order. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "q" if params.q.is_none() => params.q = Some(value.into()),
                "limit" if params.limit.is_none() => params.limit = Some(value.into()),
                "campus" => params.campus.push(value.into()),
                "keyword" => params.keyword.push(value.into()),
                _ => {}
            }
        }
        params
    }
}

/// A normalized search request, ready for the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Primary query term (if any) followed by extra keywords. Lowercase,
    /// trimmed, never empty strings. Not deduplicated.
    pub terms: Vec<String>,
    /// Lowercase, trimmed campus display names. Empty means no filter.
    pub campuses: HashSet<String>,
    /// Always in `1..=MAX_LIMIT`.
    pub limit: usize,
}

impl SearchQuery {
    /// `false` means the caller should answer with [`EMPTY_QUERY_MESSAGE`].
    pub fn has_terms(&self) -> bool {
        !self.terms.is_empty()
    }
}

/// Normalizes raw parameters into a [`SearchQuery`].
pub fn normalize(params: &SearchParams) -> SearchQuery {
    let primary = params
        .q
        .as_deref()
        .map(|q| q.to_lowercase().trim().to_string())
        .filter(|q| !q.is_empty());

    let terms = primary
        .into_iter()
        .chain(split_values(&params.keyword))
        .collect();

    SearchQuery {
        terms,
        campuses: split_values(&params.campus).into_iter().collect(),
        limit: parse_limit(params.limit.as_deref()),
    }
}

/// Splits every value on `,`, trims and lowercases each piece, and drops
/// empty pieces. Order is preserved and duplicates are kept.
pub fn split_values<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.as_ref().split(','))
        .map(|piece| piece.trim().to_lowercase())
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Parses the `limit` parameter.
///
/// Accepts anything `f64` parses (fractions, exponents, surrounding
/// whitespace). Radix-prefixed strings such as `0x10` are not numbers
/// here and fall back to the default. Non-finite values and values whose
/// floor is below 1 fall back to [`DEFAULT_LIMIT`]; everything else is
/// floored and capped at [`MAX_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 1.0)
        .map(|value| value.floor().min(MAX_LIMIT as f64) as usize)
        .unwrap_or(DEFAULT_LIMIT)
}
