// Field matcher
// Unranked substring filters over the catalog, returned in catalog order

use crate::catalog::DrugCatalog;
use crate::normalize::fold;
use crate::types::{DrugRecord, FieldFilter};

/// Whether `haystack` contains the already-folded `needle`, ignoring case
fn folded_contains(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(needle)
}

/// Filter records whose uses, common side effects or selected names contain `query`.
///
/// # Arguments
/// * `filter` - which names to consult besides uses and side effects
///
/// # Example
/// ```
/// # use drug_search::{DrugCatalog, DrugRecord, FieldFilter, matcher::filter_records};
/// let catalog = DrugCatalog::from_records(vec![
///     DrugRecord::new("Ibuprofen", "Advil", "ยาเม็ด").with_indications("ลดไข้"),
/// ]);
/// assert_eq!(filter_records(&catalog, "ADV", FieldFilter::All).len(), 1);
/// assert!(filter_records(&catalog, "adv", FieldFilter::Generic).is_empty());
/// ```
pub fn filter_records<'a>(
    catalog: &'a DrugCatalog,
    query: &str,
    filter: FieldFilter,
) -> Vec<&'a DrugRecord> {
    let needle = fold(query);

    catalog
        .iter()
        .filter(|r| {
            let name_hit = match filter {
                FieldFilter::All => {
                    folded_contains(&r.generic_name, &needle)
                        || folded_contains(&r.brand_name, &needle)
                }
                FieldFilter::Generic => folded_contains(&r.generic_name, &needle),
                FieldFilter::Brand => folded_contains(&r.brand_name, &needle),
            };
            name_hit
                || folded_contains(&r.indications, &needle)
                || folded_contains(&r.common_side_effects, &needle)
        })
        .collect()
}

/// Records whose generic or brand name contains `query`, ignoring case
pub fn search_by_name<'a>(catalog: &'a DrugCatalog, query: &str) -> Vec<&'a DrugRecord> {
    let needle = fold(query);
    catalog
        .iter()
        .filter(|r| {
            folded_contains(&r.generic_name, &needle) || folded_contains(&r.brand_name, &needle)
        })
        .collect()
}

/// Records whose dosage form contains `form`, ignoring case and surrounding whitespace
pub fn search_by_form<'a>(catalog: &'a DrugCatalog, form: &str) -> Vec<&'a DrugRecord> {
    let needle = fold(form.trim());
    catalog
        .iter()
        .filter(|r| folded_contains(&r.dosage_form, &needle))
        .collect()
}
