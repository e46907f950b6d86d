// Drug Search Type Definitions
// Core types for catalog records, search configuration and results

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// A single drug entry from the bundled catalog.
///
/// The dataset uses Thai column names; English camelCase keys are accepted
/// as aliases. Every field is a plain `String`: missing keys and `null`
/// values both load as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrugRecord {
    /// Active ingredient name
    #[serde(
        rename = "ชื่อสามัญ",
        alias = "genericName",
        default,
        deserialize_with = "lenient_string"
    )]
    pub generic_name: String,

    /// Commercial name, used as the deduplication key
    #[serde(
        rename = "ชื่อการค้า",
        alias = "brandName",
        default,
        deserialize_with = "lenient_string"
    )]
    pub brand_name: String,

    /// Free-text dosage form (tablet, syrup, cream, ...)
    #[serde(
        rename = "รูปแบบยา",
        alias = "dosageForm",
        default,
        deserialize_with = "lenient_string"
    )]
    pub dosage_form: String,

    /// What the drug is used for
    #[serde(
        rename = "ยานี้ใช้สำหรับ",
        alias = "indications",
        default,
        deserialize_with = "lenient_string"
    )]
    pub indications: String,

    #[serde(
        rename = "วิธีการใช้ยา",
        alias = "usageInstructions",
        default,
        deserialize_with = "lenient_string"
    )]
    pub usage_instructions: String,

    #[serde(
        rename = "สิ่งที่ควรแจ้งให้แพทย์หรือเภสัชกรทราบ",
        alias = "doctorNotices",
        default,
        deserialize_with = "lenient_string"
    )]
    pub doctor_notices: String,

    #[serde(
        rename = "ทำอย่างไรหากลืมรับประทานยาหรือใช้ยา",
        alias = "missedDoseInstructions",
        default,
        deserialize_with = "lenient_string"
    )]
    pub missed_dose_instructions: String,

    #[serde(
        rename = "อาการไม่พึงประสงค์ทั่วไป",
        alias = "commonSideEffects",
        default,
        deserialize_with = "lenient_string"
    )]
    pub common_side_effects: String,

    #[serde(
        rename = "อาการไม่พึงประสงค์ที่ต้องแจ้งแพทย์หรือเภสัชกรทันที",
        alias = "urgentSideEffects",
        default,
        deserialize_with = "lenient_string"
    )]
    pub urgent_side_effects: String,

    #[serde(
        rename = "การเก็บรักษายา",
        alias = "storageInstructions",
        default,
        deserialize_with = "lenient_string"
    )]
    pub storage_instructions: String,

    #[serde(
        rename = "URL",
        alias = "referenceUrl",
        default,
        deserialize_with = "lenient_string"
    )]
    pub reference_url: String,
}

impl DrugRecord {
    /// Create a record with the identifying fields set and everything else empty
    pub fn new(generic_name: &str, brand_name: &str, dosage_form: &str) -> Self {
        Self {
            generic_name: generic_name.to_string(),
            brand_name: brand_name.to_string(),
            dosage_form: dosage_form.to_string(),
            ..Self::default()
        }
    }

    /// Set indications text
    pub fn with_indications(mut self, indications: &str) -> Self {
        self.indications = indications.to_string();
        self
    }

    /// Set common side effects text
    pub fn with_side_effects(mut self, side_effects: &str) -> Self {
        self.common_side_effects = side_effects.to_string();
        self
    }

    /// Name shown to users: the brand name, or the generic name when no brand exists
    pub fn display_name(&self) -> &str {
        if self.brand_name.is_empty() {
            &self.generic_name
        } else {
            &self.brand_name
        }
    }

    /// Text of a searchable field
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::GenericName => &self.generic_name,
            SearchField::BrandName => &self.brand_name,
            SearchField::Indications => &self.indications,
            SearchField::SideEffects => &self.common_side_effects,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Number of catalog records sharing one (trimmed) dosage form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrugFormSummary {
    pub form: String,
    pub count: usize,
}

/// Record fields that advanced search can scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    GenericName,
    BrandName,
    /// "Used for" text
    Indications,
    /// Common side effects text
    SideEffects,
}

impl SearchField {
    /// Every searchable field, in scoring order
    pub const ALL: [SearchField; 4] = [
        SearchField::GenericName,
        SearchField::BrandName,
        SearchField::Indications,
        SearchField::SideEffects,
    ];
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchField::GenericName => write!(f, "generic"),
            SearchField::BrandName => write!(f, "brand"),
            SearchField::Indications => write!(f, "uses"),
            SearchField::SideEffects => write!(f, "side-effects"),
        }
    }
}

impl FromStr for SearchField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic" | "generic-name" => Ok(SearchField::GenericName),
            "brand" | "brand-name" => Ok(SearchField::BrandName),
            "uses" | "indications" => Ok(SearchField::Indications),
            "side-effects" | "sideeffects" => Ok(SearchField::SideEffects),
            other => Err(QueryError::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}

/// Ranking strategy for a free-text query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Keyword match-count ranking, catalog order on ties
    Smart,

    /// Weighted multi-field scoring driven by the scoring rule table
    #[default]
    Advanced,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Smart => write!(f, "Smart"),
            SearchMode::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Configuration for advanced search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Compare text without case folding
    pub case_sensitive: bool,

    /// Fields scanned for each keyword
    pub search_fields: Vec<SearchField>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            search_fields: SearchField::ALL.to_vec(),
            limit: None,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_fields(mut self, fields: &[SearchField]) -> Self {
        self.search_fields = fields.to_vec();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a field takes part in scoring
    pub fn scans(&self, field: SearchField) -> bool {
        self.search_fields.contains(&field)
    }
}

/// A record together with its advanced-search score breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate<'a> {
    pub record: &'a DrugRecord,
    pub score: u32,
    pub exact_matches: usize,
    pub partial_matches: usize,
}

/// Which names a plain substring filter consults besides uses and side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldFilter {
    /// Generic and brand names
    #[default]
    All,
    /// Generic name only
    Generic,
    /// Brand name only
    Brand,
}

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Advisory query validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid query: empty")]
    Empty,

    #[error("Invalid query: {actual} characters is less than minimum of {min}")]
    TooShort { min: usize, actual: usize },

    #[error("Invalid query: no letters or digits")]
    NoAlphanumeric,

    #[error("Unknown search field '{name}': use generic, brand, uses or side-effects")]
    UnknownField { name: String },
}
