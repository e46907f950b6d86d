// Integration tests for name lookup, validation and label parsing

use drug_search::{
    extract_label_keywords, find_by_brand, find_by_generic, find_by_name, validate_query,
    DrugCatalog, QueryError,
};

fn catalog() -> DrugCatalog {
    DrugCatalog::embedded().unwrap()
}

#[test]
fn test_lookup_by_brand_variants() {
    let catalog = catalog();
    for name in ["Voltaren Emulgel", "voltaren emulgel", "  VOLTAREN EMULGEL ", "VoltarenEmulgel"] {
        let found = find_by_name(&catalog, name).unwrap();
        assert_eq!(found.generic_name, "Diclofenac Gel", "lookup failed for {:?}", name);
    }
}

#[test]
fn test_lookup_by_generic_variants() {
    let catalog = catalog();
    assert_eq!(find_by_name(&catalog, "omeprazole").unwrap().brand_name, "Losec");
    assert_eq!(find_by_name(&catalog, "Povidone-Iodine").unwrap().brand_name, "Betadine");
    assert_eq!(find_by_name(&catalog, "paracetamolsyrup").unwrap().brand_name, "Tempra");
}

#[test]
fn test_lookup_not_found() {
    let catalog = catalog();
    assert!(find_by_name(&catalog, "Aspirin").is_none());
    assert!(find_by_name(&catalog, "   ").is_none());
}

#[test]
fn test_single_field_lookup() {
    let catalog = catalog();
    assert_eq!(find_by_brand(&catalog, "zyrtec").unwrap().generic_name, "Cetirizine");
    assert!(find_by_brand(&catalog, "cetirizine").is_none());
    assert_eq!(find_by_generic(&catalog, "CETIRIZINE").unwrap().brand_name, "Zyrtec");
}

#[test]
fn test_lookup_results_have_all_fields() {
    let catalog = catalog();
    let record = find_by_name(&catalog, "Tylenol").unwrap();

    assert!(!record.usage_instructions.is_empty());
    assert!(!record.storage_instructions.is_empty());
    assert!(record.reference_url.starts_with("https://"));
}

#[test]
fn test_validation_messages() {
    assert!(validate_query("tylenol", 2).is_ok());
    assert_eq!(validate_query("", 1), Err(QueryError::Empty));
    assert_eq!(
        validate_query("x", 2).unwrap_err().to_string(),
        "Invalid query: 1 characters is less than minimum of 2"
    );
    assert_eq!(validate_query("...", 2), Err(QueryError::NoAlphanumeric));
}

#[test]
fn test_label_keywords_mixed_script() {
    let text = "Amoxil 500mg แคปซูล\nAmoxicillin";
    assert_eq!(
        extract_label_keywords(text),
        vec!["amoxil", "แคปซูล", "amoxicillin"]
    );
}
