use campus_model::{Classification, College, CollegeFields};
use campus_types::{CourseId, Region};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn fields(name: &str) -> CollegeFields {
    CollegeFields {
        name: name.to_string(),
        location: "Jaipur, Rajasthan".to_string(),
        region: Region::India,
        description: "Engineering and pharmacy programs".to_string(),
        image: String::new(),
    }
}

// ── Creation ──────────────────────────────────────────────────────

#[test]
fn create_assigns_fresh_id() {
    let a = College::create(fields("Alpha College"), HashSet::new());
    let b = College::create(fields("Alpha College"), HashSet::new());
    assert_ne!(a.id, b.id);
}

#[test]
fn create_stores_classification() {
    let c = College::create(fields("IIT Delhi"), HashSet::new());
    assert_eq!(c.classification, Classification::Government);

    let c = College::create(fields("Sunrise College"), HashSet::new());
    assert_eq!(c.classification, Classification::Private);
}

#[test]
fn create_keeps_initial_reference_set() {
    let course = CourseId::new();
    let c = College::create(fields("Alpha College"), HashSet::from([course]));
    assert!(c.offers(course));
    assert_eq!(c.courses_offered.len(), 1);
}

// ── Field replace ─────────────────────────────────────────────────

#[test]
fn apply_fields_replaces_attributes() {
    let mut c = College::create(fields("Alpha College"), HashSet::new());
    let mut updated = fields("Beta College");
    updated.region = Region::Abroad;
    c.apply_fields(updated);

    assert_eq!(c.name, "Beta College");
    assert_eq!(c.region, Region::Abroad);
}

#[test]
fn apply_fields_reclassifies_from_new_name() {
    let mut c = College::create(fields("Sunrise College"), HashSet::new());
    assert_eq!(c.classification, Classification::Private);

    c.apply_fields(fields("NIT Warangal"));
    assert_eq!(c.classification, Classification::Government);
}

#[test]
fn apply_fields_preserves_identity_and_references() {
    let course = CourseId::new();
    let mut c = College::create(fields("Alpha College"), HashSet::from([course]));
    let id = c.id;
    let created_at = c.created_at;

    c.apply_fields(fields("Renamed College"));
    assert_eq!(c.id, id);
    assert_eq!(c.created_at, created_at);
    assert!(c.offers(course));
}

// ── Validation ────────────────────────────────────────────────────

#[test]
fn validate_rejects_empty_name() {
    assert!(fields("").validate().is_err());
    assert!(fields("   ").validate().is_err());
}

#[test]
fn validate_accepts_complete_fields() {
    assert!(fields("Alpha College").validate().is_ok());
}

// ── Serde ─────────────────────────────────────────────────────────

#[test]
fn college_serde_roundtrip() {
    let c = College::create(fields("IIM Bangalore"), HashSet::from([CourseId::new()]));
    let json = serde_json::to_string(&c).unwrap();
    let back: College = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn college_fields_region_defaults_to_india() {
    let json = r#"{"name": "Alpha College", "location": "Pune"}"#;
    let f: CollegeFields = serde_json::from_str(json).unwrap();
    assert_eq!(f.region, Region::India);
    assert_eq!(f.description, "");
    assert_eq!(f.image, "");
}
