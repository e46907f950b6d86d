// Drug Search Engine
// Ranked free-text search plus the facade that ties every lookup together

use crate::catalog::DrugCatalog;
use crate::lookup;
use crate::matcher;
use crate::normalize::{collate, fold, keywords};
use crate::pattern;
use crate::rules::{first_matching_rule, FieldClass, ScoreCard};
use crate::similar;
use crate::suggest;
use crate::types::{
    DrugFormSummary, DrugRecord, FieldFilter, ScoredCandidate, SearchField, SearchMode,
    SearchOptions,
};
use std::cmp::Ordering;
use tracing::debug;

/// Keyword match-count ranking.
///
/// Each keyword of the folded query counts once per record if it appears in
/// the generic name, brand name, indications or dosage form. Records with no
/// hits are dropped; ties keep catalog order.
pub fn search_smart<'a>(catalog: &'a DrugCatalog, query: &str) -> Vec<&'a DrugRecord> {
    let folded = fold(query);
    let keywords = keywords(&folded);
    if keywords.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&DrugRecord, usize)> = catalog
        .iter()
        .filter_map(|record| {
            let haystacks = [
                fold(&record.generic_name),
                fold(&record.brand_name),
                fold(&record.indications),
                fold(&record.dosage_form),
            ];
            let hits = keywords
                .iter()
                .filter(|kw| haystacks.iter().any(|h| h.contains(*kw)))
                .count();
            (hits > 0).then_some((record, hits))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    debug!(query, results = scored.len(), "smart search");

    scored.into_iter().map(|(record, _)| record).collect()
}

/// Score every record against `query` and return the ranked candidates.
///
/// Only records scoring above zero are returned, ordered by score, then
/// exact matches, then partial matches, then brand name in Thai dictionary
/// order. An empty or whitespace-only query returns nothing.
pub fn rank_advanced<'a>(
    catalog: &'a DrugCatalog,
    query: &str,
    options: &SearchOptions,
) -> Vec<ScoredCandidate<'a>> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let normalized = if options.case_sensitive {
        trimmed.to_string()
    } else {
        fold(trimmed)
    };
    let keywords = keywords(&normalized);

    let mut ranked: Vec<ScoredCandidate<'a>> = catalog
        .iter()
        .filter_map(|record| {
            let card = score_record(record, &keywords, options);
            (card.score > 0).then_some(ScoredCandidate {
                record,
                score: card.score,
                exact_matches: card.exact_matches,
                partial_matches: card.partial_matches,
            })
        })
        .collect();

    ranked.sort_by(compare_candidates);
    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }

    debug!(
        query,
        keywords = keywords.len(),
        results = ranked.len(),
        "advanced search"
    );
    ranked
}

fn score_record(record: &DrugRecord, keywords: &[&str], options: &SearchOptions) -> ScoreCard {
    let mut card = ScoreCard::default();

    // Each field scores at most once per keyword, however often it is listed
    let fields: Vec<(FieldClass, String)> = SearchField::ALL
        .iter()
        .filter(|&&field| options.scans(field))
        .map(|&field| {
            let text = record.field(field);
            let text = if options.case_sensitive {
                text.to_string()
            } else {
                fold(text)
            };
            (FieldClass::from(field), text)
        })
        .collect();

    for keyword in keywords {
        for (class, text) in &fields {
            if let Some(rule) = first_matching_rule(*class, text, keyword) {
                card.award(rule);
            }
        }
    }

    card.apply_keyword_bonus(keywords.len());
    card
}

fn compare_candidates(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.exact_matches.cmp(&a.exact_matches))
        .then_with(|| b.partial_matches.cmp(&a.partial_matches))
        .then_with(|| collate(&a.record.brand_name, &b.record.brand_name))
}

/// Weighted multi-field search returning records only
pub fn search_advanced<'a>(
    catalog: &'a DrugCatalog,
    query: &str,
    options: &SearchOptions,
) -> Vec<&'a DrugRecord> {
    rank_advanced(catalog, query, options)
        .into_iter()
        .map(|candidate| candidate.record)
        .collect()
}

/// Run `query` in the given mode. `options` apply to advanced search only.
pub fn search<'a>(
    catalog: &'a DrugCatalog,
    query: &str,
    mode: SearchMode,
    options: &SearchOptions,
) -> Vec<&'a DrugRecord> {
    match mode {
        SearchMode::Smart => search_smart(catalog, query),
        SearchMode::Advanced => search_advanced(catalog, query, options),
    }
}

/// Main drug search engine
///
/// Borrows a loaded catalog and exposes every lookup the UI and OCR
/// pipeline need:
/// - Ranked search (smart and advanced modes)
/// - Exact name lookup
/// - Autocomplete suggestions
/// - Similar drugs
/// - Dosage form grouping and filters
#[derive(Debug, Clone, Copy)]
pub struct DrugSearch<'c> {
    catalog: &'c DrugCatalog,
}

impl<'c> DrugSearch<'c> {
    /// Create an engine over a fully loaded catalog
    pub fn new(catalog: &'c DrugCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c DrugCatalog {
        self.catalog
    }

    /// Execute a ranked search
    ///
    /// # Example
    /// ```
    /// # use drug_search::{DrugCatalog, DrugSearch, SearchMode, SearchOptions};
    /// let catalog = DrugCatalog::embedded()?;
    /// let engine = DrugSearch::new(&catalog);
    /// let results = engine.search("tylenol", SearchMode::Advanced, &SearchOptions::default());
    /// assert_eq!(results[0].brand_name, "Tylenol");
    /// # Ok::<(), drug_search::CatalogError>(())
    /// ```
    pub fn search(
        &self,
        query: &str,
        mode: SearchMode,
        options: &SearchOptions,
    ) -> Vec<&'c DrugRecord> {
        search(self.catalog, query, mode, options)
    }

    /// Advanced search with the score breakdown kept
    pub fn rank(&self, query: &str, options: &SearchOptions) -> Vec<ScoredCandidate<'c>> {
        rank_advanced(self.catalog, query, options)
    }

    /// Advanced search with default options and a result cap
    pub fn search_limit(&self, query: &str, limit: usize) -> Vec<&'c DrugRecord> {
        search_advanced(self.catalog, query, &SearchOptions::default().with_limit(limit))
    }

    /// Unranked substring filter
    pub fn filter(&self, query: &str, filter: FieldFilter) -> Vec<&'c DrugRecord> {
        matcher::filter_records(self.catalog, query, filter)
    }

    /// Records in a dosage form
    pub fn by_form(&self, form: &str) -> Vec<&'c DrugRecord> {
        matcher::search_by_form(self.catalog, form)
    }

    /// Resolve one record by brand or generic name
    pub fn find_by_name(&self, name: &str) -> Option<&'c DrugRecord> {
        lookup::find_by_name(self.catalog, name)
    }

    /// Autocomplete strings for a partial query
    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<String> {
        suggest::suggest(self.catalog, partial, limit)
    }

    /// Drugs related to `record`
    pub fn find_similar(&self, record: &DrugRecord, limit: usize) -> Vec<&'c DrugRecord> {
        similar::find_similar(self.catalog, record, limit)
    }

    /// Match drugs from text read off a photographed label
    pub fn search_label_text(&self, text: &str) -> Vec<&'c DrugRecord> {
        pattern::search_label_text(self.catalog, text)
    }

    /// Record count per dosage form
    pub fn group_by_form(&self) -> Vec<DrugFormSummary> {
        self.catalog.group_by_form()
    }

    /// Catalog statistics: (record count, distinct dosage forms)
    pub fn stats(&self) -> (usize, usize) {
        (self.catalog.len(), self.catalog.group_by_form().len())
    }
}
