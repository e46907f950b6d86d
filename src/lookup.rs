// Exact name lookup
// Resolves a single record by brand or generic name for direct navigation

use crate::catalog::DrugCatalog;
use crate::normalize::{fold, fold_compact};
use crate::types::DrugRecord;

/// Find one record by name.
///
/// Tries, in order, the first match winning:
/// 1. trimmed case-insensitive brand name
/// 2. whitespace-insensitive brand name
/// 3. the same two rules against the generic name
///
/// # Example
/// ```
/// # use drug_search::{DrugCatalog, DrugRecord, lookup::find_by_name};
/// let catalog = DrugCatalog::from_records(vec![DrugRecord::new("Ibuprofen", "Advil", "ยาเม็ด")]);
/// assert!(find_by_name(&catalog, " ADVIL ").is_some());
/// assert!(find_by_name(&catalog, "ibu profen").is_some());
/// assert!(find_by_name(&catalog, "aspirin").is_none());
/// ```
pub fn find_by_name<'a>(catalog: &'a DrugCatalog, name: &str) -> Option<&'a DrugRecord> {
    let wanted = fold(name.trim());
    let wanted_compact = fold_compact(name);

    let resolve = |field: fn(&DrugRecord) -> &str| {
        catalog
            .iter()
            .find(|r| fold(field(r).trim()) == wanted)
            .or_else(|| catalog.iter().find(|r| fold_compact(field(r)) == wanted_compact))
    };

    resolve(brand_of).or_else(|| resolve(generic_of))
}

fn brand_of(record: &DrugRecord) -> &str {
    &record.brand_name
}

fn generic_of(record: &DrugRecord) -> &str {
    &record.generic_name
}

/// Find the first record whose brand name equals `name`, ignoring case
pub fn find_by_brand<'a>(catalog: &'a DrugCatalog, name: &str) -> Option<&'a DrugRecord> {
    let wanted = fold(name);
    catalog.iter().find(|r| fold(&r.brand_name) == wanted)
}

/// Find the first record whose generic name equals `name`, ignoring case
pub fn find_by_generic<'a>(catalog: &'a DrugCatalog, name: &str) -> Option<&'a DrugRecord> {
    let wanted = fold(name);
    catalog.iter().find(|r| fold(&r.generic_name) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> DrugCatalog {
        DrugCatalog::from_records(vec![
            DrugRecord::new("Paracetamol", "Tylenol", "ยาเม็ด"),
            DrugRecord::new("Diclofenac Gel", "Voltaren Emulgel", "ยาทาภายนอก"),
            DrugRecord::new("Tylenol", "Generic Brand", "ยาเม็ด"),
        ])
    }

    #[test]
    fn test_brand_match_trimmed_case_insensitive() {
        let catalog = catalog();
        let found = find_by_name(&catalog, "  tyLENOL ").unwrap();
        assert_eq!(found.generic_name, "Paracetamol");
    }

    #[test]
    fn test_brand_match_ignores_inner_whitespace() {
        let catalog = catalog();
        let found = find_by_name(&catalog, "voltarenemulgel").unwrap();
        assert_eq!(found.brand_name, "Voltaren Emulgel");
    }

    #[test]
    fn test_brand_wins_over_generic() {
        // "Tylenol" is both a brand (record 0) and a generic name (record 2)
        let catalog = catalog();
        let found = find_by_name(&catalog, "Tylenol").unwrap();
        assert_eq!(found.brand_name, "Tylenol");
    }

    #[test]
    fn test_generic_fallback() {
        let catalog = catalog();
        assert_eq!(
            find_by_name(&catalog, "Para CETAMOL").map(|r| &r.brand_name),
            find_by_name(&catalog, "paracetamol").map(|r| &r.brand_name)
        );
        assert_eq!(
            find_by_name(&catalog, "diclofenac gel").unwrap().brand_name,
            "Voltaren Emulgel"
        );
    }

    #[test]
    fn test_not_found() {
        let catalog = catalog();
        assert!(find_by_name(&catalog, "Aspirin").is_none());
        assert!(find_by_name(&catalog, "").is_none());
    }

    #[test]
    fn test_single_field_lookups() {
        let catalog = catalog();
        let gel = find_by_brand(&catalog, "VOLTAREN EMULGEL").unwrap();
        assert_eq!(gel.generic_name, "Diclofenac Gel");
        assert!(find_by_brand(&catalog, "Paracetamol").is_none());
        assert_eq!(find_by_generic(&catalog, "tylenol").unwrap().brand_name, "Generic Brand");
    }
}
