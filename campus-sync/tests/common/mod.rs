//! Shared test helpers for synchronizer tests.

#![allow(dead_code)]

use campus_model::{College, CollegeFields, Course, CourseFields};
use campus_store::{CatalogStore, MemoryStore};
use campus_types::{CollegeId, CourseId, Region};
use std::collections::HashSet;
use std::sync::Arc;

pub fn memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub fn college_fields(name: &str) -> CollegeFields {
    CollegeFields {
        name: name.to_string(),
        location: "Jaipur".to_string(),
        region: Region::India,
        description: String::new(),
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

pub fn seed_college(store: &dyn CatalogStore, name: &str) -> CollegeId {
    seed_college_with(store, name, HashSet::new())
}

pub fn seed_college_with(
    store: &dyn CatalogStore,
    name: &str,
    courses: HashSet<CourseId>,
) -> CollegeId {
    let college = College::create(college_fields(name), courses);
    store.insert_college(&college).unwrap();
    college.id
}

pub fn seed_course(store: &dyn CatalogStore, name: &str) -> CourseId {
    seed_course_with(store, name, HashSet::new())
}

pub fn seed_course_with(
    store: &dyn CatalogStore,
    name: &str,
    colleges: HashSet<CollegeId>,
) -> CourseId {
    let course = Course::create(course_fields(name), colleges);
    store.insert_course(&course).unwrap();
    course.id
}

/// Forward set of a college as currently stored.
pub fn courses_of(store: &dyn CatalogStore, id: CollegeId) -> HashSet<CourseId> {
    store.get_college(id).unwrap().unwrap().courses_offered
}

/// Forward set of a course as currently stored.
pub fn colleges_of(store: &dyn CatalogStore, id: CourseId) -> HashSet<CollegeId> {
    store.get_course(id).unwrap().unwrap().colleges
}
