//! Fault-injecting store wrapper.
//!
//! Wraps any [`CatalogStore`] and runs a caller-installed hook before each
//! mutating primitive. The hook sees the primitive's name and may fail the
//! call (to exercise partial-failure paths) or reenter the wrapped store
//! (to pin down a specific interleaving of two catalog operations).
//!
//! While a hook runs it is taken out of its slot, so store calls made from
//! inside the hook pass straight through to the backend.

use crate::store::CatalogStore;
use crate::{StoreError, StoreResult};
use campus_model::{College, CollegeFields, Course, CourseFields};
use campus_types::{CollegeId, CourseId};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

type MutationHook = Box<dyn FnMut(&'static str) -> StoreResult<()> + Send>;

/// A [`CatalogStore`] decorator for tests of store-failure behavior.
pub struct FaultStore {
    inner: Arc<dyn CatalogStore>,
    hook: Mutex<Option<MutationHook>>,
}

impl FaultStore {
    /// Wraps a backend with no hook installed.
    pub fn new(inner: Arc<dyn CatalogStore>) -> Self {
        Self {
            inner,
            hook: Mutex::new(None),
        }
    }

    /// Installs a hook invoked before every mutating primitive with the
    /// primitive's name. Returning an error aborts that call before it
    /// reaches the backend.
    pub fn set_hook(&self, hook: impl FnMut(&'static str) -> StoreResult<()> + Send + 'static) {
        if let Ok(mut slot) = self.hook.lock() {
            *slot = Some(Box::new(hook));
        }
    }

    /// Removes the installed hook, if any.
    pub fn clear_hook(&self) {
        if let Ok(mut slot) = self.hook.lock() {
            *slot = None;
        }
    }

    /// Convenience: fail every call to the named primitive, let all other
    /// mutations through.
    pub fn fail_on(&self, target: &'static str) {
        self.set_hook(move |op| {
            if op == target {
                Err(StoreError::Unavailable(format!("injected fault on {op}")))
            } else {
                Ok(())
            }
        });
    }

    fn intercept(&self, op: &'static str) -> StoreResult<()> {
        let taken = self
            .hook
            .lock()
            .map_err(|_| StoreError::Unavailable("fault hook lock poisoned".to_string()))?
            .take();
        let Some(mut hook) = taken else {
            return Ok(());
        };
        let result = hook(op);
        if let Ok(mut slot) = self.hook.lock() {
            if slot.is_none() {
                *slot = Some(hook);
            }
        }
        result
    }
}

impl CatalogStore for FaultStore {
    fn insert_college(&self, college: &College) -> StoreResult<()> {
        self.intercept("insert_college")?;
        self.inner.insert_college(college)
    }

    fn get_college(&self, id: CollegeId) -> StoreResult<Option<College>> {
        self.inner.get_college(id)
    }

    fn get_colleges(&self, ids: &HashSet<CollegeId>) -> StoreResult<Vec<College>> {
        self.inner.get_colleges(ids)
    }

    fn list_colleges(&self) -> StoreResult<Vec<College>> {
        self.inner.list_colleges()
    }

    fn set_college_fields(&self, id: CollegeId, fields: CollegeFields) -> StoreResult<bool> {
        self.intercept("set_college_fields")?;
        self.inner.set_college_fields(id, fields)
    }

    fn set_courses_offered(&self, id: CollegeId, courses: &HashSet<CourseId>) -> StoreResult<bool> {
        self.intercept("set_courses_offered")?;
        self.inner.set_courses_offered(id, courses)
    }

    fn remove_college(&self, id: CollegeId) -> StoreResult<bool> {
        self.intercept("remove_college")?;
        self.inner.remove_college(id)
    }

    fn pull_college_from_courses(&self, id: CollegeId) -> StoreResult<u64> {
        self.intercept("pull_college_from_courses")?;
        self.inner.pull_college_from_courses(id)
    }

    fn push_college_to_courses(
        &self,
        courses: &HashSet<CourseId>,
        id: CollegeId,
    ) -> StoreResult<u64> {
        self.intercept("push_college_to_courses")?;
        self.inner.push_college_to_courses(courses, id)
    }

    fn courses_referencing(&self, id: CollegeId) -> StoreResult<Vec<CourseId>> {
        self.inner.courses_referencing(id)
    }

    fn insert_course(&self, course: &Course) -> StoreResult<()> {
        self.intercept("insert_course")?;
        self.inner.insert_course(course)
    }

    fn get_course(&self, id: CourseId) -> StoreResult<Option<Course>> {
        self.inner.get_course(id)
    }

    fn get_courses(&self, ids: &HashSet<CourseId>) -> StoreResult<Vec<Course>> {
        self.inner.get_courses(ids)
    }

    fn list_courses(&self) -> StoreResult<Vec<Course>> {
        self.inner.list_courses()
    }

    fn set_course_fields(&self, id: CourseId, fields: CourseFields) -> StoreResult<bool> {
        self.intercept("set_course_fields")?;
        self.inner.set_course_fields(id, fields)
    }

    fn set_colleges(&self, id: CourseId, colleges: &HashSet<CollegeId>) -> StoreResult<bool> {
        self.intercept("set_colleges")?;
        self.inner.set_colleges(id, colleges)
    }

    fn remove_course(&self, id: CourseId) -> StoreResult<bool> {
        self.intercept("remove_course")?;
        self.inner.remove_course(id)
    }

    fn pull_course_from_colleges(&self, id: CourseId) -> StoreResult<u64> {
        self.intercept("pull_course_from_colleges")?;
        self.inner.pull_course_from_colleges(id)
    }

    fn push_course_to_colleges(
        &self,
        colleges: &HashSet<CollegeId>,
        id: CourseId,
    ) -> StoreResult<u64> {
        self.intercept("push_course_to_colleges")?;
        self.inner.push_course_to_colleges(colleges, id)
    }

    fn colleges_referencing(&self, id: CourseId) -> StoreResult<Vec<CollegeId>> {
        self.inner.colleges_referencing(id)
    }
}
