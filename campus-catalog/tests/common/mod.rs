//! Shared test helpers for catalog service tests.

#![allow(dead_code)]

use campus_catalog::CatalogService;
use campus_model::{CollegeFields, CourseFields};
use campus_store::MemoryStore;
use campus_types::Region;
use std::sync::Arc;

pub fn service() -> (Arc<MemoryStore>, CatalogService) {
    let store = Arc::new(MemoryStore::new());
    let service = CatalogService::new(store.clone());
    (store, service)
}

pub fn college_fields(name: &str) -> CollegeFields {
    CollegeFields {
        name: name.to_string(),
        location: "Jaipur, Rajasthan".to_string(),
        region: Region::India,
        description: "Multi-disciplinary programs".to_string(),
        image: String::new(),
    }
}

pub fn course_fields(name: &str) -> CourseFields {
    CourseFields {
        name: name.to_string(),
        level: "Bachelor".to_string(),
        eligibility: "10+2".to_string(),
    }
}
