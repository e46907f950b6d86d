// Data loader for the embedded catalog
// The drug dataset is compiled into the binary so lookups never touch the network

/// Embedded drug catalog (JSON array of flat Thai-keyed records)
pub const CATALOG_DATA: &[u8] = include_bytes!("../data/drug_catalog.json");

/// Data loader utility
pub struct DataLoader;

impl DataLoader {
    /// Get the raw catalog bytes
    pub fn catalog_data() -> &'static [u8] {
        CATALOG_DATA
    }

    /// Get embedded data info
    pub fn info() -> DataInfo {
        DataInfo {
            catalog_size: CATALOG_DATA.len(),
        }
    }
}

/// Information about embedded data
#[derive(Debug, Clone)]
pub struct DataInfo {
    /// Size of the catalog JSON in bytes
    pub catalog_size: usize,
}
