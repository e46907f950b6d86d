// Autocomplete suggestions
// Brand and generic names containing a partial query, prefix matches first

use crate::catalog::DrugCatalog;
use crate::normalize::fold;
use crate::pattern::MIN_SUGGEST_CHARS;
use rustc_hash::FxHashSet;

/// Default number of suggestions shown under the search box
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Suggest completions for a partial query.
///
/// Queries shorter than two characters (after trimming) yield nothing.
/// Candidates are every distinct brand and generic name containing the
/// query, ignoring case. Names starting with the query come first, then
/// shorter names; otherwise first-seen catalog order is kept.
///
/// # Example
/// ```
/// # use drug_search::{DrugCatalog, DrugRecord, suggest::suggest};
/// let catalog = DrugCatalog::from_records(vec![
///     DrugRecord::new("Amoxicillin", "Amoxil", "ยาแคปซูล"),
/// ]);
/// assert_eq!(suggest(&catalog, "amox", 10), vec!["Amoxil", "Amoxicillin"]);
/// assert!(suggest(&catalog, "a", 10).is_empty());
/// ```
pub fn suggest(catalog: &DrugCatalog, partial: &str, limit: usize) -> Vec<String> {
    let query = fold(partial.trim());
    if query.chars().count() < MIN_SUGGEST_CHARS {
        return Vec::new();
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut candidates: Vec<(&str, bool)> = Vec::new();

    for record in catalog {
        for name in [record.brand_name.as_str(), record.generic_name.as_str()] {
            let folded = fold(name);
            if folded.contains(&query) && seen.insert(name) {
                candidates.push((name, folded.starts_with(&query)));
            }
        }
    }

    candidates.sort_by(|(a, a_prefix), (b, b_prefix)| {
        b_prefix
            .cmp(a_prefix)
            .then_with(|| a.chars().count().cmp(&b.chars().count()))
    });

    candidates
        .into_iter()
        .take(limit)
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DrugRecord;

    fn catalog(names: &[(&str, &str)]) -> DrugCatalog {
        DrugCatalog::from_records(
            names
                .iter()
                .map(|(generic, brand)| DrugRecord::new(generic, brand, "ยาเม็ด"))
                .collect(),
        )
    }

    #[test]
    fn test_short_query_is_empty() {
        let catalog = catalog(&[("Amoxicillin", "Amoxil")]);
        assert!(suggest(&catalog, "", 10).is_empty());
        assert!(suggest(&catalog, " a  ", 10).is_empty());
        assert_eq!(suggest(&catalog, " am ", 10).len(), 2);
    }

    #[test]
    fn test_prefix_before_interior_then_length() {
        let catalog = catalog(&[("Dermoxicillin", "Amoxicillin"), ("Oxis", "Amox")]);
        // "oxi" is a prefix only of "Oxis"; the rest tie and sort by length
        assert_eq!(
            suggest(&catalog, "oxi", 10),
            vec!["Oxis", "Amoxicillin", "Dermoxicillin"]
        );
        assert_eq!(suggest(&catalog, "AMOX", 10), vec!["Amox", "Amoxicillin"]);
    }

    #[test]
    fn test_deduplicates_names() {
        let catalog = catalog(&[("Paracetamol", "Tylenol"), ("Paracetamol", "Sara")]);
        assert_eq!(suggest(&catalog, "para", 10), vec!["Paracetamol"]);
    }

    #[test]
    fn test_equal_length_keeps_first_seen_order() {
        let catalog = catalog(&[("Zeta", "Beta"), ("Meta", "Alfa")]);
        assert_eq!(suggest(&catalog, "eta", 10), vec!["Beta", "Zeta", "Meta"]);
    }

    #[test]
    fn test_limit() {
        let catalog = catalog(&[("Cetirizine", "Zyrtec"), ("Levocetirizine", "Xyzal")]);
        assert_eq!(suggest(&catalog, "cetirizine", 1), vec!["Cetirizine"]);
        assert!(suggest(&catalog, "cetirizine", 0).is_empty());
    }

    #[test]
    fn test_thai_names() {
        let catalog = catalog(&[("พาราเซตามอล", "ซาร่า")]);
        assert_eq!(suggest(&catalog, "พารา", 10), vec!["พาราเซตามอล"]);
    }
}
