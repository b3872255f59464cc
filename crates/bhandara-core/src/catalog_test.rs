use std::io::Write;

use super::*;
use crate::test_support::location;

#[test]
fn category_parses_known_labels_case_insensitively() {
    assert_eq!(
        Category::from("gurudwara langar".to_string()),
        Category::GurudwaraLangar
    );
    assert_eq!(
        Category::from("Temple Annadanam".to_string()),
        Category::TempleAnnadanam
    );
}

#[test]
fn category_keeps_unknown_labels_verbatim() {
    let category = Category::from("Church Soup Kitchen".to_string());
    assert_eq!(category, Category::Other("Church Soup Kitchen".to_string()));
    assert_eq!(category.to_string(), "Church Soup Kitchen");
}

#[test]
fn category_defaults_to_temple_bhandara() {
    assert_eq!(Category::default(), Category::TempleBhandara);
}

#[test]
fn from_json_reads_bare_array_with_type_field() {
    let json = r#"[
        {
            "id": 7,
            "name": "ISKCON Juhu Prasadam",
            "city": "Mumbai",
            "country": "India",
            "lat": 19.113,
            "lng": 72.826,
            "timing": "Sundays 1:00 PM",
            "description": "Sunday feast",
            "type": "Temple Prasadam"
        }
    ]"#;

    let catalog = Catalog::from_json(json).expect("valid catalog");
    assert_eq!(catalog.len(), 1);
    let loc = catalog.get(LocationId(7)).expect("id 7 present");
    assert_eq!(loc.category, Category::TemplePrasadam);
    assert_eq!(loc.city, "Mumbai");
}

#[test]
fn from_yaml_reads_locations_document() {
    let yaml = "
locations:
  - id: 1
    name: Ajmer Sharif Langar
    city: Ajmer
    country: India
    lat: 26.456
    lng: 74.628
    timing: Daily
    description: Degh langar
    type: Dargah Langar
";
    let catalog = Catalog::from_yaml(yaml).expect("valid catalog");
    assert_eq!(catalog.locations()[0].category, Category::DargahLangar);
}

#[test]
fn new_rejects_duplicate_ids() {
    let result = Catalog::new(vec![
        location(1, "A", "Mumbai", 19.0, 72.8),
        location(1, "B", "Pune", 18.5, 73.8),
    ]);
    assert!(
        matches!(result, Err(CatalogError::Validation(ref msg)) if msg.contains("duplicate")),
        "expected duplicate id error, got: {result:?}"
    );
}

#[test]
fn new_rejects_blank_name() {
    let result = Catalog::new(vec![location(1, "   ", "Mumbai", 19.0, 72.8)]);
    assert!(matches!(result, Err(CatalogError::Validation(_))));
}

#[test]
fn new_rejects_out_of_range_latitude() {
    let result = Catalog::new(vec![location(1, "North", "Nowhere", 91.0, 0.0)]);
    assert!(
        matches!(result, Err(CatalogError::Validation(ref msg)) if msg.contains("latitude")),
        "expected latitude error, got: {result:?}"
    );
}

#[test]
fn new_rejects_out_of_range_longitude() {
    let result = Catalog::new(vec![location(1, "East", "Nowhere", 0.0, 180.5)]);
    assert!(
        matches!(result, Err(CatalogError::Validation(ref msg)) if msg.contains("longitude")),
        "expected longitude error, got: {result:?}"
    );
}

#[test]
fn get_returns_none_for_unknown_id() {
    let catalog = crate::test_support::three_cities();
    assert!(catalog.get(LocationId(99)).is_none());
}

#[test]
fn load_catalog_rejects_unknown_extension() {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("tempfile");
    writeln!(file, "id,name").expect("write");

    let result = load_catalog(file.path());
    assert!(
        matches!(result, Err(CatalogError::UnsupportedFormat(ref ext)) if ext == "csv"),
        "expected UnsupportedFormat(csv), got: {result:?}"
    );
}

#[test]
fn load_catalog_reports_missing_file() {
    let result = load_catalog(Path::new("/definitely/not/here.json"));
    assert!(matches!(result, Err(CatalogError::Io { .. })));
}

#[test]
fn load_catalog_reads_json_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("tempfile");
    write!(
        file,
        r#"{{"locations": [{{"id": 3, "name": "Bangla Sahib", "city": "Delhi", "country": "India",
            "lat": 28.626, "lng": 77.209, "timing": "24x7", "description": "Langar",
            "type": "Gurudwara Langar"}}]}}"#
    )
    .expect("write");

    let catalog = load_catalog(file.path()).expect("load");
    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.get(LocationId(3)).map(|l| l.name.as_str()),
        Some("Bangla Sahib")
    );
}

#[test]
fn shipped_catalog_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/bhandaras.json");
    let catalog = load_catalog(&path).expect("shipped catalog must load");
    assert!(!catalog.is_empty());
}
