// Drug catalog
// Immutable in-memory collection of drug records, loaded once and shared by reference

use crate::data::DataLoader;
use crate::types::{CatalogError, DrugFormSummary, DrugRecord};
use rand::seq::index;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;
use tracing::{debug, info};

/// Read-only drug catalog.
///
/// Built once by the application root and borrowed by every search
/// operation. Nothing mutates it after construction, so a shared
/// reference can be used from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct DrugCatalog {
    records: Vec<DrugRecord>,
}

impl DrugCatalog {
    /// Load the dataset embedded in the crate
    ///
    /// # Example
    /// ```
    /// # use drug_search::DrugCatalog;
    /// let catalog = DrugCatalog::embedded().unwrap();
    /// assert!(!catalog.is_empty());
    /// ```
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json_slice(DataLoader::catalog_data())
    }

    /// Parse a catalog from JSON bytes (an array of flat records)
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let records: Vec<DrugRecord> = serde_json::from_slice(bytes)?;
        info!(records = records.len(), "drug catalog loaded");
        Ok(Self { records })
    }

    /// Parse a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::from_json_slice(json.as_bytes())
    }

    /// Read and parse a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading drug catalog");
        let bytes = std::fs::read(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&bytes)
    }

    /// Build a catalog from records already in memory
    pub fn from_records(records: Vec<DrugRecord>) -> Self {
        Self { records }
    }

    /// All records in catalog order
    pub fn records(&self) -> &[DrugRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrugRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count records per trimmed dosage form, in order of first appearance
    pub fn group_by_form(&self) -> Vec<DrugFormSummary> {
        let mut positions: FxHashMap<&str, usize> = FxHashMap::default();
        let mut summaries: Vec<DrugFormSummary> = Vec::new();

        for record in &self.records {
            let form = record.dosage_form.trim();
            match positions.get(form) {
                Some(&pos) => summaries[pos].count += 1,
                None => {
                    positions.insert(form, summaries.len());
                    summaries.push(DrugFormSummary {
                        form: form.to_string(),
                        count: 1,
                    });
                }
            }
        }

        summaries
    }

    /// Pick up to `n` distinct display names at random, for search prompts
    pub fn random_names<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<&str> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let names: Vec<&str> = self
            .records
            .iter()
            .map(DrugRecord::display_name)
            .filter(|&name| !name.is_empty() && seen.insert(name))
            .collect();

        let amount = n.min(names.len());
        index::sample(rng, names.len(), amount)
            .into_iter()
            .map(|i| names[i])
            .collect()
    }
}

impl<'a> IntoIterator for &'a DrugCatalog {
    type Item = &'a DrugRecord;
    type IntoIter = std::slice::Iter<'a, DrugRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn sample_catalog() -> DrugCatalog {
        DrugCatalog::from_records(vec![
            DrugRecord::new("Paracetamol", "Tylenol", "ยาเม็ด"),
            DrugRecord::new("Amoxicillin", "Amoxil", "ยาแคปซูล"),
            DrugRecord::new("Ibuprofen", "Advil", " ยาเม็ด "),
            DrugRecord::new("Povidone-Iodine", "", "ยาทาภายนอก"),
        ])
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = DrugCatalog::embedded().unwrap();
        assert!(catalog.len() >= 5);
        assert!(catalog.iter().all(|r| !r.brand_name.is_empty()));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let result = DrugCatalog::from_json_str(r#"{"not": "an array"}"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));

        let result = DrugCatalog::from_json_str("[{\"ชื่อสามัญ\": 42}]");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = DrugCatalog::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_group_by_form_trims_and_keeps_first_seen_order() {
        let groups = sample_catalog().group_by_form();

        assert_eq!(
            groups,
            vec![
                DrugFormSummary { form: "ยาเม็ด".to_string(), count: 2 },
                DrugFormSummary { form: "ยาแคปซูล".to_string(), count: 1 },
                DrugFormSummary { form: "ยาทาภายนอก".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_group_by_form_counts_sum_to_len() {
        let catalog = DrugCatalog::embedded().unwrap();
        let total: usize = catalog.group_by_form().iter().map(|g| g.count).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn test_random_names_distinct_and_bounded() {
        let catalog = sample_catalog();
        let mut rng = ChaCha20Rng::from_seed([42u8; 32]);

        let picked = catalog.random_names(3, &mut rng);
        assert_eq!(picked.len(), 3);
        let mut unique = picked.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 3);

        let all = catalog.random_names(10, &mut rng);
        assert_eq!(all.len(), 4);
        assert!(all.contains(&"Povidone-Iodine"));
    }

    #[test]
    fn test_random_names_skips_repeated_brands() {
        let catalog = DrugCatalog::from_records(vec![
            DrugRecord::new("Paracetamol", "Tylenol", "ยาเม็ด"),
            DrugRecord::new("Paracetamol", "Tylenol", "ยาน้ำ"),
            DrugRecord::new("Ibuprofen", "Advil", "ยาเม็ด"),
        ]);
        let mut rng = ChaCha20Rng::from_seed([42u8; 32]);

        let mut all = catalog.random_names(10, &mut rng);
        all.sort();
        assert_eq!(all, vec!["Advil", "Tylenol"]);
    }

    #[test]
    fn test_random_names_empty_catalog() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        assert!(DrugCatalog::default().random_names(5, &mut rng).is_empty());
    }
}
