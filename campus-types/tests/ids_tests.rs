use campus_types::{CollegeId, CourseId};
use proptest::prelude::*;
use std::collections::HashSet;
use std::str::FromStr;

// ── CollegeId ─────────────────────────────────────────────────────

#[test]
fn college_id_new_is_unique() {
    let a = CollegeId::new();
    let b = CollegeId::new();
    assert_ne!(a, b);
}

#[test]
fn college_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::now_v7();
    let id = CollegeId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn college_id_display_and_parse() {
    let id = CollegeId::new();
    let s = id.to_string();
    let parsed = CollegeId::parse(&s).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn college_id_from_str() {
    let id = CollegeId::new();
    let parsed = CollegeId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn college_id_parse_invalid() {
    assert!(CollegeId::parse("not-a-uuid").is_err());
}

#[test]
fn college_id_hash_and_eq() {
    let id = CollegeId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id); // duplicate
    assert_eq!(set.len(), 1);
}

#[test]
fn college_id_serde_is_transparent() {
    let id = CollegeId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
    let back: CollegeId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

// ── CourseId ──────────────────────────────────────────────────────

#[test]
fn course_id_new_is_unique() {
    let a = CourseId::new();
    let b = CourseId::new();
    assert_ne!(a, b);
}

#[test]
fn course_id_display_and_parse() {
    let id = CourseId::new();
    let parsed = CourseId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn course_id_from_str_invalid() {
    assert!(CourseId::from_str("garbage").is_err());
}

#[test]
fn course_id_default_is_unique() {
    let a = CourseId::default();
    let b = CourseId::default();
    assert_ne!(a, b);
}

// ── Properties ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn college_id_display_parse_roundtrip(bytes in any::<[u8; 16]>()) {
        let id = CollegeId::from_uuid(uuid::Uuid::from_bytes(bytes));
        prop_assert_eq!(CollegeId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn course_id_display_parse_roundtrip(bytes in any::<[u8; 16]>()) {
        let id = CourseId::from_uuid(uuid::Uuid::from_bytes(bytes));
        prop_assert_eq!(CourseId::parse(&id.to_string()).unwrap(), id);
    }
}
