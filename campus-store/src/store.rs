use crate::StoreResult;
use campus_model::{College, CollegeFields, Course, CourseFields};
use campus_types::{CollegeId, CourseId};
use std::collections::HashSet;

/// Storage contract for the two catalog collections.
///
/// Each method is atomic per matched document; no method touches both
/// collections. The bulk conditional updates mirror a document store's
/// update-many with `$pull` / `$addToSet`: ids that match no document
/// simply update zero documents, which is what makes dangling references a
/// silent no-op at link time.
///
/// Only the reference synchronizer may call the pull/push primitives; the
/// store itself never maintains the inverse sets.
pub trait CatalogStore: Send + Sync {
    // ── Colleges ──────────────────────────────────────────────────

    /// Inserts a new college. Errors if the id already exists.
    fn insert_college(&self, college: &College) -> StoreResult<()>;

    /// Point lookup.
    fn get_college(&self, id: CollegeId) -> StoreResult<Option<College>>;

    /// Bulk lookup by identifier set. Unknown ids yield no row.
    fn get_colleges(&self, ids: &HashSet<CollegeId>) -> StoreResult<Vec<College>>;

    /// All colleges, in stable id order.
    fn list_colleges(&self) -> StoreResult<Vec<College>>;

    /// Full replace of the college's attribute fields (not its reference
    /// set). Returns `false` when the id does not exist.
    fn set_college_fields(&self, id: CollegeId, fields: CollegeFields) -> StoreResult<bool>;

    /// Full replace of the college's forward reference set. Returns
    /// `false` when the id does not exist.
    fn set_courses_offered(&self, id: CollegeId, courses: &HashSet<CourseId>) -> StoreResult<bool>;

    /// Removes the college. Returns `false` when the id did not exist.
    fn remove_college(&self, id: CollegeId) -> StoreResult<bool>;

    /// Reverse-lookup pull: removes `id` from the `colleges` set of every
    /// course currently containing it. Returns the matched count.
    fn pull_college_from_courses(&self, id: CollegeId) -> StoreResult<u64>;

    /// Set-union push: adds `id` to the `colleges` set of every course
    /// named in `courses`. Already-present ids are a no-op, unknown ids
    /// match zero documents. Returns the matched count.
    fn push_college_to_courses(
        &self,
        courses: &HashSet<CourseId>,
        id: CollegeId,
    ) -> StoreResult<u64>;

    /// Read-only reverse lookup: every course whose `colleges` set
    /// contains `id`.
    fn courses_referencing(&self, id: CollegeId) -> StoreResult<Vec<CourseId>>;

    // ── Courses ───────────────────────────────────────────────────

    /// Inserts a new course. Errors if the id already exists.
    fn insert_course(&self, course: &Course) -> StoreResult<()>;

    /// Point lookup.
    fn get_course(&self, id: CourseId) -> StoreResult<Option<Course>>;

    /// Bulk lookup by identifier set. Unknown ids yield no row.
    fn get_courses(&self, ids: &HashSet<CourseId>) -> StoreResult<Vec<Course>>;

    /// All courses, in stable id order.
    fn list_courses(&self) -> StoreResult<Vec<Course>>;

    /// Full replace of the course's attribute fields. Returns `false`
    /// when the id does not exist.
    fn set_course_fields(&self, id: CourseId, fields: CourseFields) -> StoreResult<bool>;

    /// Full replace of the course's forward reference set. Returns
    /// `false` when the id does not exist.
    fn set_colleges(&self, id: CourseId, colleges: &HashSet<CollegeId>) -> StoreResult<bool>;

    /// Removes the course. Returns `false` when the id did not exist.
    fn remove_course(&self, id: CourseId) -> StoreResult<bool>;

    /// Reverse-lookup pull: removes `id` from the `courses_offered` set of
    /// every college currently containing it. Returns the matched count.
    fn pull_course_from_colleges(&self, id: CourseId) -> StoreResult<u64>;

    /// Set-union push: adds `id` to the `courses_offered` set of every
    /// college named in `colleges`. Returns the matched count.
    fn push_course_to_colleges(
        &self,
        colleges: &HashSet<CollegeId>,
        id: CourseId,
    ) -> StoreResult<u64>;

    /// Read-only reverse lookup: every college whose `courses_offered` set
    /// contains `id`.
    fn colleges_referencing(&self, id: CourseId) -> StoreResult<Vec<CollegeId>>;
}
