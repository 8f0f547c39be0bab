//! In-process catalog store.
//!
//! Two `BTreeMap` tables behind independent locks. Every trait method takes
//! exactly one lock, so each call is atomic on its own collection while a
//! sequence of calls is freely interleavable with other callers: the same
//! consistency model as a document store without multi-document
//! transactions.

use crate::store::CatalogStore;
use crate::{StoreError, StoreResult};
use campus_model::{College, CollegeFields, Course, CourseFields};
use campus_types::{CollegeId, CourseId};
use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// In-memory backend for [`CatalogStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    colleges: RwLock<BTreeMap<CollegeId, College>>,
    courses: RwLock<BTreeMap<CourseId, Course>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<'a, T>(lock: &'a RwLock<T>, table: &str) -> StoreResult<RwLockReadGuard<'a, T>> {
    lock.read()
        .map_err(|_| StoreError::Unavailable(format!("{table} table lock poisoned")))
}

fn write<'a, T>(lock: &'a RwLock<T>, table: &str) -> StoreResult<RwLockWriteGuard<'a, T>> {
    lock.write()
        .map_err(|_| StoreError::Unavailable(format!("{table} table lock poisoned")))
}

impl CatalogStore for MemoryStore {
    // ── Colleges ──────────────────────────────────────────────────

    fn insert_college(&self, college: &College) -> StoreResult<()> {
        let mut table = write(&self.colleges, "college")?;
        if table.contains_key(&college.id) {
            return Err(StoreError::Duplicate(college.id.to_string()));
        }
        table.insert(college.id, college.clone());
        Ok(())
    }

    fn get_college(&self, id: CollegeId) -> StoreResult<Option<College>> {
        Ok(read(&self.colleges, "college")?.get(&id).cloned())
    }

    fn get_colleges(&self, ids: &HashSet<CollegeId>) -> StoreResult<Vec<College>> {
        let table = read(&self.colleges, "college")?;
        Ok(table
            .values()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    fn list_colleges(&self) -> StoreResult<Vec<College>> {
        Ok(read(&self.colleges, "college")?.values().cloned().collect())
    }

    fn set_college_fields(&self, id: CollegeId, fields: CollegeFields) -> StoreResult<bool> {
        let mut table = write(&self.colleges, "college")?;
        match table.get_mut(&id) {
            Some(college) => {
                college.apply_fields(fields);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn set_courses_offered(&self, id: CollegeId, courses: &HashSet<CourseId>) -> StoreResult<bool> {
        let mut table = write(&self.colleges, "college")?;
        match table.get_mut(&id) {
            Some(college) => {
                college.courses_offered = courses.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_college(&self, id: CollegeId) -> StoreResult<bool> {
        Ok(write(&self.colleges, "college")?.remove(&id).is_some())
    }

    fn pull_college_from_courses(&self, id: CollegeId) -> StoreResult<u64> {
        let mut table = write(&self.courses, "course")?;
        let mut matched = 0;
        for course in table.values_mut() {
            if course.colleges.remove(&id) {
                matched += 1;
            }
        }
        debug!(college = %id, matched, "pulled college from courses");
        Ok(matched)
    }

    fn push_college_to_courses(
        &self,
        courses: &HashSet<CourseId>,
        id: CollegeId,
    ) -> StoreResult<u64> {
        let mut table = write(&self.courses, "course")?;
        let mut matched = 0;
        for course_id in courses {
            if let Some(course) = table.get_mut(course_id) {
                course.colleges.insert(id);
                matched += 1;
            }
        }
        debug!(college = %id, matched, "pushed college to courses");
        Ok(matched)
    }

    fn courses_referencing(&self, id: CollegeId) -> StoreResult<Vec<CourseId>> {
        let table = read(&self.courses, "course")?;
        Ok(table
            .values()
            .filter(|course| course.offered_by(id))
            .map(|course| course.id)
            .collect())
    }

    // ── Courses ───────────────────────────────────────────────────

    fn insert_course(&self, course: &Course) -> StoreResult<()> {
        let mut table = write(&self.courses, "course")?;
        if table.contains_key(&course.id) {
            return Err(StoreError::Duplicate(course.id.to_string()));
        }
        table.insert(course.id, course.clone());
        Ok(())
    }

    fn get_course(&self, id: CourseId) -> StoreResult<Option<Course>> {
        Ok(read(&self.courses, "course")?.get(&id).cloned())
    }

    fn get_courses(&self, ids: &HashSet<CourseId>) -> StoreResult<Vec<Course>> {
        let table = read(&self.courses, "course")?;
        Ok(table
            .values()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    fn list_courses(&self) -> StoreResult<Vec<Course>> {
        Ok(read(&self.courses, "course")?.values().cloned().collect())
    }

    fn set_course_fields(&self, id: CourseId, fields: CourseFields) -> StoreResult<bool> {
        let mut table = write(&self.courses, "course")?;
        match table.get_mut(&id) {
            Some(course) => {
                course.apply_fields(fields);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn set_colleges(&self, id: CourseId, colleges: &HashSet<CollegeId>) -> StoreResult<bool> {
        let mut table = write(&self.courses, "course")?;
        match table.get_mut(&id) {
            Some(course) => {
                course.colleges = colleges.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_course(&self, id: CourseId) -> StoreResult<bool> {
        Ok(write(&self.courses, "course")?.remove(&id).is_some())
    }

    fn pull_course_from_colleges(&self, id: CourseId) -> StoreResult<u64> {
        let mut table = write(&self.colleges, "college")?;
        let mut matched = 0;
        for college in table.values_mut() {
            if college.courses_offered.remove(&id) {
                matched += 1;
            }
        }
        debug!(course = %id, matched, "pulled course from colleges");
        Ok(matched)
    }

    fn push_course_to_colleges(
        &self,
        colleges: &HashSet<CollegeId>,
        id: CourseId,
    ) -> StoreResult<u64> {
        let mut table = write(&self.colleges, "college")?;
        let mut matched = 0;
        for college_id in colleges {
            if let Some(college) = table.get_mut(college_id) {
                college.courses_offered.insert(id);
                matched += 1;
            }
        }
        debug!(course = %id, matched, "pushed course to colleges");
        Ok(matched)
    }

    fn colleges_referencing(&self, id: CourseId) -> StoreResult<Vec<CollegeId>> {
        let table = read(&self.colleges, "college")?;
        Ok(table
            .values()
            .filter(|college| college.offers(id))
            .map(|college| college.id)
            .collect())
    }
}
