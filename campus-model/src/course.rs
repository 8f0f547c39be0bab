use campus_types::{CollegeId, CourseId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A course as stored in the catalog.
///
/// `colleges` mirrors [`crate::College::courses_offered`]: for every college
/// id in it, that college's `courses_offered` must contain this course's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    /// e.g. "B.Tech", "MBA".
    pub name: String,
    /// Free-text tier label, e.g. "Bachelor", "Master".
    pub level: String,
    /// Free-text admission requirement, e.g. "10+2 with PCM".
    pub eligibility: String,
    pub colleges: HashSet<CollegeId>,
}

impl Course {
    /// Builds a new course record with a fresh ID.
    #[must_use]
    pub fn create(fields: CourseFields, colleges: HashSet<CollegeId>) -> Self {
        Self {
            id: CourseId::new(),
            name: fields.name,
            level: fields.level,
            eligibility: fields.eligibility,
            colleges,
        }
    }

    /// Replaces every attribute from `fields`. Identity and the reference
    /// set are untouched.
    pub fn apply_fields(&mut self, fields: CourseFields) {
        self.name = fields.name;
        self.level = fields.level;
        self.eligibility = fields.eligibility;
    }

    /// Whether this course lists the given college.
    #[must_use]
    pub fn offered_by(&self, college: CollegeId) -> bool {
        self.colleges.contains(&college)
    }
}

/// The attribute payload of a course create or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseFields {
    pub name: String,
    pub level: String,
    pub eligibility: String,
}

impl CourseFields {
    /// Validates the payload before any store write.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("course name must not be empty".to_string());
        }
        if self.level.trim().is_empty() {
            return Err("course level must not be empty".to_string());
        }
        if self.eligibility.trim().is_empty() {
            return Err("course eligibility must not be empty".to_string());
        }
        Ok(())
    }
}
