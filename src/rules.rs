// Scoring rules for advanced search
// Ordered point table: field class → match kind → points

use crate::types::SearchField;

/// Groups of fields that share one scoring policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldClass {
    /// Generic and brand names
    Name,
    Indications,
    SideEffects,
}

impl From<SearchField> for FieldClass {
    fn from(field: SearchField) -> Self {
        match field {
            SearchField::GenericName | SearchField::BrandName => FieldClass::Name,
            SearchField::Indications => FieldClass::Indications,
            SearchField::SideEffects => FieldClass::SideEffects,
        }
    }
}

/// How a keyword relates to a field's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Field equals the keyword
    Exact,
    /// Field starts with the keyword
    Prefix,
    /// Keyword appears anywhere in the field
    Contains,
}

impl MatchKind {
    /// Whether `field` satisfies this kind of match for `keyword`
    pub fn matches(self, field: &str, keyword: &str) -> bool {
        match self {
            MatchKind::Exact => field == keyword,
            MatchKind::Prefix => field.starts_with(keyword),
            MatchKind::Contains => field.contains(keyword),
        }
    }
}

/// Which counter a matched rule increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTally {
    Exact,
    Partial,
}

/// One row of the scoring table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRule {
    pub class: FieldClass,
    pub kind: MatchKind,
    pub points: u32,
    pub tally: MatchTally,
}

const fn rule(class: FieldClass, kind: MatchKind, points: u32, tally: MatchTally) -> ScoringRule {
    ScoringRule {
        class,
        kind,
        points,
        tally,
    }
}

/// Scoring table. Rows for a class are checked top to bottom and only the
/// first matching row applies per (keyword, field).
pub const SCORING_RULES: &[ScoringRule] = &[
    rule(FieldClass::Name, MatchKind::Exact, 100, MatchTally::Exact),
    rule(FieldClass::Name, MatchKind::Prefix, 50, MatchTally::Partial),
    rule(FieldClass::Name, MatchKind::Contains, 10, MatchTally::Partial),
    rule(FieldClass::Indications, MatchKind::Contains, 5, MatchTally::Partial),
    rule(FieldClass::SideEffects, MatchKind::Contains, 3, MatchTally::Partial),
];

/// Bonus per exact match when the query has several keywords
pub const MULTI_KEYWORD_EXACT_BONUS: u32 = 20;

/// Bonus per partial match when the query has several keywords
pub const MULTI_KEYWORD_PARTIAL_BONUS: u32 = 5;

/// Find the rule that applies to one keyword against one field's text
///
/// # Example
/// ```
/// # use drug_search::rules::{first_matching_rule, FieldClass, MatchKind};
/// let rule = first_matching_rule(FieldClass::Name, "paracetamolforte", "paracetamol").unwrap();
/// assert_eq!(rule.kind, MatchKind::Prefix);
/// assert_eq!(rule.points, 50);
/// ```
pub fn first_matching_rule(
    class: FieldClass,
    field: &str,
    keyword: &str,
) -> Option<&'static ScoringRule> {
    SCORING_RULES
        .iter()
        .filter(|r| r.class == class)
        .find(|r| r.kind.matches(field, keyword))
}

/// Running score for one record across all keywords
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCard {
    pub score: u32,
    pub exact_matches: usize,
    pub partial_matches: usize,
}

impl ScoreCard {
    /// Apply a matched rule
    pub fn award(&mut self, rule: &ScoringRule) {
        self.score += rule.points;
        match rule.tally {
            MatchTally::Exact => self.exact_matches += 1,
            MatchTally::Partial => self.partial_matches += 1,
        }
    }

    /// Add the multi-keyword bonus; a no-op for single-keyword queries
    pub fn apply_keyword_bonus(&mut self, keyword_count: usize) {
        if keyword_count <= 1 {
            return;
        }
        let exact = self.exact_matches.min(keyword_count) as u32;
        let partial = self.partial_matches.min(keyword_count) as u32;
        self.score += exact * MULTI_KEYWORD_EXACT_BONUS + partial * MULTI_KEYWORD_PARTIAL_BONUS;
    }
}
