//! Inverse-reference maintenance for catalog mutations.
//!
//! Every method is a short sequence of store primitives, each atomic on its
//! own but not atomic as a whole. Within one invocation the steps run
//! strictly in order; across invocations nothing is ordered, and the caller
//! is assumed (not forced) to serialize writes per entity.

use crate::{SyncError, SyncResult, SyncStep};
use campus_store::CatalogStore;
use campus_types::{CollegeId, CourseId};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Applies inverse-side updates for college and course mutations.
///
/// This is the only component allowed to mutate `Course::colleges` and
/// `College::courses_offered` on the inverse side.
pub struct ReferenceSynchronizer {
    store: Arc<dyn CatalogStore>,
}

impl ReferenceSynchronizer {
    /// Creates a synchronizer over the given store.
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    // ── College as primary side ───────────────────────────────────

    /// A college was created holding `courses` as its initial forward set:
    /// add it to each of those courses' `colleges` sets.
    ///
    /// Set-union semantics; ids that resolve to no course are dropped
    /// silently, so a create raced by a delete still succeeds.
    pub fn college_created(&self, id: CollegeId, courses: &HashSet<CourseId>) -> SyncResult<()> {
        if courses.is_empty() {
            return Ok(());
        }
        let matched = self
            .store
            .push_college_to_courses(courses, id)
            .map_err(SyncError::at(SyncStep::Establish))?;
        if (matched as usize) < courses.len() {
            warn!(
                college = %id,
                requested = courses.len(),
                matched,
                "dangling course references dropped at create"
            );
        }
        debug!(college = %id, matched, "established back-references for new college");
        Ok(())
    }

    /// A college's course list was replaced with `courses`: make the course
    /// side reflect exactly that set.
    ///
    /// Three steps, in hard order: replace the forward set, retract, then
    /// establish. Retraction reverse-looks-up every course currently
    /// pointing at the college rather than reading the old forward set, so
    /// running establish first would hand retraction fresh links to strip.
    pub fn college_updated(&self, id: CollegeId, courses: &HashSet<CourseId>) -> SyncResult<()> {
        let found = self
            .store
            .set_courses_offered(id, courses)
            .map_err(SyncError::at(SyncStep::ReplaceForward))?;
        if !found {
            return Err(SyncError::NotFound {
                kind: "college",
                id: id.to_string(),
            });
        }

        let retracted = self
            .store
            .pull_college_from_courses(id)
            .map_err(SyncError::at(SyncStep::Retract))?;

        let matched = self
            .store
            .push_college_to_courses(courses, id)
            .map_err(SyncError::at(SyncStep::Establish))?;
        if (matched as usize) < courses.len() {
            warn!(
                college = %id,
                requested = courses.len(),
                matched,
                "dangling course references dropped at update"
            );
        }
        debug!(college = %id, retracted, established = matched, "resynced course back-references");
        Ok(())
    }

    /// A college is being deleted: remove the record, then excise it from
    /// every course still pointing at it.
    ///
    /// The college's own forward set is never consulted; cleanup is driven
    /// entirely by the reverse lookup, which also clears links a previous
    /// partial failure left one-sided.
    pub fn college_deleted(&self, id: CollegeId) -> SyncResult<()> {
        let removed = self
            .store
            .remove_college(id)
            .map_err(SyncError::at(SyncStep::RemovePrimary))?;
        if !removed {
            return Err(SyncError::NotFound {
                kind: "college",
                id: id.to_string(),
            });
        }

        let retracted = self
            .store
            .pull_college_from_courses(id)
            .map_err(SyncError::at(SyncStep::Retract))?;
        debug!(college = %id, retracted, "excised deleted college from courses");
        Ok(())
    }

    // ── Course as primary side ────────────────────────────────────

    /// A course was created holding `colleges` as its initial forward set.
    pub fn course_created(&self, id: CourseId, colleges: &HashSet<CollegeId>) -> SyncResult<()> {
        if colleges.is_empty() {
            return Ok(());
        }
        let matched = self
            .store
            .push_course_to_colleges(colleges, id)
            .map_err(SyncError::at(SyncStep::Establish))?;
        if (matched as usize) < colleges.len() {
            warn!(
                course = %id,
                requested = colleges.len(),
                matched,
                "dangling college references dropped at create"
            );
        }
        debug!(course = %id, matched, "established back-references for new course");
        Ok(())
    }

    /// A course's college list was replaced with `colleges`. Same step
    /// sequence and ordering constraint as [`Self::college_updated`].
    pub fn course_updated(&self, id: CourseId, colleges: &HashSet<CollegeId>) -> SyncResult<()> {
        let found = self
            .store
            .set_colleges(id, colleges)
            .map_err(SyncError::at(SyncStep::ReplaceForward))?;
        if !found {
            return Err(SyncError::NotFound {
                kind: "course",
                id: id.to_string(),
            });
        }

        let retracted = self
            .store
            .pull_course_from_colleges(id)
            .map_err(SyncError::at(SyncStep::Retract))?;

        let matched = self
            .store
            .push_course_to_colleges(colleges, id)
            .map_err(SyncError::at(SyncStep::Establish))?;
        if (matched as usize) < colleges.len() {
            warn!(
                course = %id,
                requested = colleges.len(),
                matched,
                "dangling college references dropped at update"
            );
        }
        debug!(course = %id, retracted, established = matched, "resynced college back-references");
        Ok(())
    }

    /// A course is being deleted. Same reverse-lookup cleanup as
    /// [`Self::college_deleted`].
    pub fn course_deleted(&self, id: CourseId) -> SyncResult<()> {
        let removed = self
            .store
            .remove_course(id)
            .map_err(SyncError::at(SyncStep::RemovePrimary))?;
        if !removed {
            return Err(SyncError::NotFound {
                kind: "course",
                id: id.to_string(),
            });
        }

        let retracted = self
            .store
            .pull_course_from_colleges(id)
            .map_err(SyncError::at(SyncStep::Retract))?;
        debug!(course = %id, retracted, "excised deleted course from colleges");
        Ok(())
    }
}
