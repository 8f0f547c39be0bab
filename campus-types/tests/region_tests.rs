use campus_types::Region;
use std::str::FromStr;

#[test]
fn region_defaults_to_india() {
    assert_eq!(Region::default(), Region::India);
}

#[test]
fn region_labels() {
    assert_eq!(Region::India.label(), "India");
    assert_eq!(Region::Abroad.label(), "Abroad");
}

#[test]
fn region_from_str_accepts_both_cases() {
    assert_eq!(Region::from_str("India").unwrap(), Region::India);
    assert_eq!(Region::from_str("abroad").unwrap(), Region::Abroad);
}

#[test]
fn region_from_str_rejects_unknown() {
    assert!(Region::from_str("Mars").is_err());
}

#[test]
fn region_serde_roundtrip() {
    let json = serde_json::to_string(&Region::Abroad).unwrap();
    assert_eq!(json, "\"abroad\"");
    let back: Region = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Region::Abroad);
}
