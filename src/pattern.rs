// Query validation and label text parsing
// Advisory checks for typed queries and keyword extraction for OCR output

use crate::catalog::DrugCatalog;
use crate::search::search_advanced;
use crate::types::{DrugRecord, QueryError, SearchOptions};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Shortest query worth sending to autocomplete
pub const MIN_SUGGEST_CHARS: usize = 2;

/// Runs of three or more Latin or Thai characters
static LABEL_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z\x{0E01}-\x{0E59}]{3,}").expect("label word regex is valid"));

/// Check a typed query before searching.
///
/// Validation is advisory: search functions accept anything and simply
/// return no results for unusable input.
///
/// # Examples
/// ```
/// # use drug_search::pattern::validate_query;
/// # use drug_search::QueryError;
/// assert!(validate_query("ลดไข้", 2).is_ok());
/// assert_eq!(validate_query("  ", 2), Err(QueryError::Empty));
/// assert_eq!(validate_query("a", 2), Err(QueryError::TooShort { min: 2, actual: 1 }));
/// assert_eq!(validate_query("?!", 2), Err(QueryError::NoAlphanumeric));
/// ```
pub fn validate_query(query: &str, min_chars: usize) -> Result<(), QueryError> {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return Err(QueryError::Empty);
    }

    let actual = trimmed.chars().count();
    if actual < min_chars {
        return Err(QueryError::TooShort {
            min: min_chars,
            actual,
        });
    }

    if !trimmed.chars().any(char::is_alphanumeric) {
        return Err(QueryError::NoAlphanumeric);
    }

    Ok(())
}

/// Pull candidate drug-name keywords out of raw OCR text, lower-cased, in text order
pub fn extract_label_keywords(text: &str) -> Vec<String> {
    LABEL_WORD
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Search each label keyword independently and merge the hits.
///
/// Every keyword runs through advanced search with default options.
/// Results keep the order in which they were first found (keyword order,
/// then rank) and are deduplicated by brand name.
pub fn search_label_text<'a>(catalog: &'a DrugCatalog, text: &str) -> Vec<&'a DrugRecord> {
    let keywords = extract_label_keywords(text);
    let options = SearchOptions::default();
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut merged = Vec::new();

    for keyword in &keywords {
        for record in search_advanced(catalog, keyword, &options) {
            if seen.insert(record.brand_name.as_str()) {
                merged.push(record);
            }
        }
    }

    debug!(keywords = keywords.len(), results = merged.len(), "label text search");
    merged
}
