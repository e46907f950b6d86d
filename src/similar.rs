// Related drugs
// Finds records sharing a dosage form or overlapping indications with a given drug

use crate::catalog::DrugCatalog;
use crate::normalize::{first_word, fold};
use crate::types::DrugRecord;
use rustc_hash::FxHashSet;

/// Default number of similar drugs shown on a detail page
pub const DEFAULT_SIMILAR_LIMIT: usize = 5;

/// Points for sharing the exact dosage form
const SAME_FORM_POINTS: usize = 3;

/// Find drugs related to `record`, never including `record` itself.
///
/// Candidates are drugs with the identical dosage form, followed by drugs
/// whose indications contain the first word of `record`'s indications.
/// Each scores 3 for a shared form plus one per indications word it shares
/// with `record`. Ties keep candidate order.
pub fn find_similar<'a>(
    catalog: &'a DrugCatalog,
    record: &DrugRecord,
    limit: usize,
) -> Vec<&'a DrugRecord> {
    let source_uses = fold(&record.indications);
    let source_words: FxHashSet<&str> = source_uses.split_whitespace().collect();
    let lead_word = first_word(&source_uses);

    let is_other = |c: &&DrugRecord| c.brand_name != record.brand_name;

    let same_form = catalog
        .iter()
        .filter(is_other)
        .filter(|c| c.dosage_form == record.dosage_form);

    // An empty lead word would match every record with indications
    let similar_uses = catalog
        .iter()
        .filter(is_other)
        .filter(|c| !lead_word.is_empty() && !c.indications.is_empty())
        .filter(|c| fold(&c.indications).contains(lead_word));

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut scored: Vec<(&DrugRecord, usize)> = same_form
        .chain(similar_uses)
        .filter(|&c| seen.insert(c.brand_name.as_str()))
        .map(|c| {
            let form_points = if c.dosage_form == record.dosage_form {
                SAME_FORM_POINTS
            } else {
                0
            };
            let shared_words = fold(&c.indications)
                .split_whitespace()
                .filter(|w| source_words.contains(w))
                .count();
            (c, form_points + shared_words)
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored.into_iter().map(|(c, _)| c).collect()
}
