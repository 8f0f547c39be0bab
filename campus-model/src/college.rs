use crate::{Classification, classify};
use campus_types::{CollegeId, CourseId, Region};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A college as stored in the catalog.
///
/// `courses_offered` is a denormalized cache of the courses pointing back
/// at this college. Only the reference synchronizer may touch the matching
/// inverse field on [`crate::Course`]; the store never maintains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct College {
    pub id: CollegeId,
    pub name: String,
    pub location: String,
    pub region: Region,
    pub description: String,
    /// URI of the college image, or empty when none was uploaded.
    pub image: String,
    /// Derived from `name` at write time; never recomputed by readers.
    pub classification: Classification,
    pub courses_offered: HashSet<CourseId>,
    pub created_at: DateTime<Utc>,
}

impl College {
    /// Builds a new college record with a fresh ID.
    ///
    /// Classification is derived from the name here, so every write path
    /// stores it rather than leaving it to display code.
    #[must_use]
    pub fn create(fields: CollegeFields, courses_offered: HashSet<CourseId>) -> Self {
        let classification = classify(&fields.name);
        Self {
            id: CollegeId::new(),
            name: fields.name,
            location: fields.location,
            region: fields.region,
            description: fields.description,
            image: fields.image,
            classification,
            courses_offered,
            created_at: Utc::now(),
        }
    }

    /// Replaces every attribute from `fields`, re-deriving the
    /// classification from the new name. Identity, reference set and
    /// creation time are untouched.
    pub fn apply_fields(&mut self, fields: CollegeFields) {
        self.classification = classify(&fields.name);
        self.name = fields.name;
        self.location = fields.location;
        self.region = fields.region;
        self.description = fields.description;
        self.image = fields.image;
    }

    /// Whether this college lists the given course.
    #[must_use]
    pub fn offers(&self, course: CourseId) -> bool {
        self.courses_offered.contains(&course)
    }
}

/// The attribute payload of a college create or update.
///
/// Updates replace all of these wholesale; the reference set is carried
/// separately because the synchronizer owns its propagation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeFields {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl CollegeFields {
    /// Validates the payload before any store write.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("college name must not be empty".to_string());
        }
        Ok(())
    }
}
