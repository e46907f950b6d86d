//! # Drug Search: ranking engine for a bundled drug-information catalog
//!
//! Turns free text (typed, or read off a photographed label) into ranked
//! drug records. The catalog is a static Thai dataset compiled into the crate.
//!
//! ## Search Modes
//!
//! 1. **Smart** - keyword match-count ranking
//!    - each keyword counts once if found in a name, the indications or the dosage form
//! 2. **Advanced** - weighted multi-field scoring
//!    - exact name 100, name prefix 50, name substring 10, indications 5, side effects 3
//!    - multi-keyword bonus, deterministic tie-breaks
//!
//! ## Example Usage
//!
//! ```
//! use drug_search::{DrugCatalog, DrugSearch, SearchMode, SearchOptions};
//!
//! let catalog = DrugCatalog::embedded()?;
//! let engine = DrugSearch::new(&catalog);
//!
//! // Ranked search
//! let results = engine.search("ibuprofen", SearchMode::Advanced, &SearchOptions::default());
//! assert_eq!(results[0].brand_name, "Advil");
//!
//! // Direct lookup, suggestions, related drugs
//! let advil = engine.find_by_name("advil").unwrap();
//! let names = engine.suggest("amo", 10);
//! let related = engine.find_similar(advil, 5);
//! assert!(!names.is_empty());
//! assert!(related.iter().all(|r| r.brand_name != "Advil"));
//! # Ok::<(), drug_search::CatalogError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Catalog** - immutable records, loaded once and passed by reference
//! - **Normalizer** - case folding and Thai-aware ordering
//! - **Lookup** - exact brand/generic resolution
//! - **Search** - smart and advanced ranking over the scoring rule table
//! - **Suggest / Similar** - autocomplete and related drugs
//! - **Pattern** - query validation and OCR label keyword extraction

pub mod catalog;
pub mod data;
pub mod lookup;
pub mod matcher;
pub mod normalize;
pub mod pattern;
pub mod rules;
pub mod search;
pub mod similar;
pub mod suggest;
pub mod types;

// Re-export main types and functions for convenience
pub use catalog::DrugCatalog;
pub use data::{DataInfo, DataLoader};
pub use lookup::{find_by_brand, find_by_generic, find_by_name};
pub use pattern::{extract_label_keywords, search_label_text, validate_query};
pub use rules::{ScoringRule, SCORING_RULES};
pub use search::{rank_advanced, search, search_advanced, search_smart, DrugSearch};
pub use similar::find_similar;
pub use suggest::suggest;
pub use types::{
    CatalogError, DrugFormSummary, DrugRecord, FieldFilter, QueryError, ScoredCandidate,
    SearchField, SearchMode, SearchOptions,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
