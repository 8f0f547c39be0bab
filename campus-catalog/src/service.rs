//! Request orchestration over the store and synchronizer.

use crate::{CatalogError, CatalogResult, EntityKind};
use campus_model::{College, CollegeFields, Course, CourseFields};
use campus_store::CatalogStore;
use campus_sync::reconcile::{self, Authority, ClosureViolation, RepairReport};
use campus_sync::{ReferenceSynchronizer, SyncError, SyncStep};
use campus_types::{CollegeId, CourseId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// A college with its course references resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeDetail {
    pub college: College,
    /// The referenced courses that exist, sorted by name. Dangling forward
    /// references resolve to nothing, they are not an error here.
    pub courses: Vec<Course>,
}

/// A course with its college references resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDetail {
    pub course: Course,
    pub colleges: Vec<College>,
}

/// The boundary the transport layer calls into: six mutating operations,
/// resolved reads, and the reconciliation entry points.
///
/// Writes to the same record are assumed to be serialized by the caller;
/// nothing here enforces that, and overlapping updates can strand the
/// inverse side (see the reconcile module).
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    sync: ReferenceSynchronizer,
}

impl CatalogService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            sync: ReferenceSynchronizer::new(store.clone()),
            store,
        }
    }

    // ── College mutations ─────────────────────────────────────────

    /// Validates and persists a new college, then links it back from the
    /// referenced courses.
    pub fn create_college(
        &self,
        fields: CollegeFields,
        courses_offered: HashSet<CourseId>,
    ) -> CatalogResult<College> {
        fields.validate().map_err(CatalogError::Validation)?;
        let college = College::create(fields, courses_offered.clone());
        self.store.insert_college(&college)?;
        debug!(college = %college.id, name = %college.name, "college created");

        self.sync
            .college_created(college.id, &courses_offered)
            .map_err(|e| sync_failure(EntityKind::College, college.id.to_string(), e))?;
        Ok(college)
    }

    /// Replaces a college's attributes and its course list.
    pub fn update_college(
        &self,
        id: CollegeId,
        fields: CollegeFields,
        courses_offered: HashSet<CourseId>,
    ) -> CatalogResult<College> {
        fields.validate().map_err(CatalogError::Validation)?;
        if !self.store.set_college_fields(id, fields)? {
            return Err(CatalogError::NotFound {
                kind: EntityKind::College,
                id: id.to_string(),
            });
        }
        debug!(college = %id, "college fields replaced");

        self.sync
            .college_updated(id, &courses_offered)
            .map_err(|e| sync_failure(EntityKind::College, id.to_string(), e))?;

        self.store
            .get_college(id)?
            .ok_or_else(|| CatalogError::NotFound {
                kind: EntityKind::College,
                id: id.to_string(),
            })
    }

    /// Removes a college and excises it from every course referencing it.
    pub fn delete_college(&self, id: CollegeId) -> CatalogResult<()> {
        self.sync.college_deleted(id).map_err(|e| match e {
            SyncError::NotFound { .. } => CatalogError::NotFound {
                kind: EntityKind::College,
                id: id.to_string(),
            },
            // The remove itself failed: nothing was applied.
            SyncError::Store {
                step: SyncStep::RemovePrimary,
                source,
            } => CatalogError::Store(source),
            other => sync_failure(EntityKind::College, id.to_string(), other),
        })?;
        debug!(college = %id, "college deleted");
        Ok(())
    }

    // ── Course mutations ──────────────────────────────────────────

    /// Validates and persists a new course, then links it back from the
    /// referenced colleges.
    pub fn create_course(
        &self,
        fields: CourseFields,
        colleges: HashSet<CollegeId>,
    ) -> CatalogResult<Course> {
        fields.validate().map_err(CatalogError::Validation)?;
        let course = Course::create(fields, colleges.clone());
        self.store.insert_course(&course)?;
        debug!(course = %course.id, name = %course.name, "course created");

        self.sync
            .course_created(course.id, &colleges)
            .map_err(|e| sync_failure(EntityKind::Course, course.id.to_string(), e))?;
        Ok(course)
    }

    /// Replaces a course's attributes and its college list.
    pub fn update_course(
        &self,
        id: CourseId,
        fields: CourseFields,
        colleges: HashSet<CollegeId>,
    ) -> CatalogResult<Course> {
        fields.validate().map_err(CatalogError::Validation)?;
        if !self.store.set_course_fields(id, fields)? {
            return Err(CatalogError::NotFound {
                kind: EntityKind::Course,
                id: id.to_string(),
            });
        }
        debug!(course = %id, "course fields replaced");

        self.sync
            .course_updated(id, &colleges)
            .map_err(|e| sync_failure(EntityKind::Course, id.to_string(), e))?;

        self.store
            .get_course(id)?
            .ok_or_else(|| CatalogError::NotFound {
                kind: EntityKind::Course,
                id: id.to_string(),
            })
    }

    /// Removes a course and excises it from every college referencing it.
    pub fn delete_course(&self, id: CourseId) -> CatalogResult<()> {
        self.sync.course_deleted(id).map_err(|e| match e {
            SyncError::NotFound { .. } => CatalogError::NotFound {
                kind: EntityKind::Course,
                id: id.to_string(),
            },
            SyncError::Store {
                step: SyncStep::RemovePrimary,
                source,
            } => CatalogError::Store(source),
            other => sync_failure(EntityKind::Course, id.to_string(), other),
        })?;
        debug!(course = %id, "course deleted");
        Ok(())
    }

    // ── Reads ─────────────────────────────────────────────────────

    /// Every college with its course references resolved.
    pub fn list_colleges(&self) -> CatalogResult<Vec<CollegeDetail>> {
        self.store
            .list_colleges()?
            .into_iter()
            .map(|college| self.resolve_college(college))
            .collect()
    }

    /// Every course with its college references resolved.
    pub fn list_courses(&self) -> CatalogResult<Vec<CourseDetail>> {
        self.store
            .list_courses()?
            .into_iter()
            .map(|course| self.resolve_course(course))
            .collect()
    }

    /// One college, resolved; `None` when the id is unknown.
    pub fn get_college(&self, id: CollegeId) -> CatalogResult<Option<CollegeDetail>> {
        match self.store.get_college(id)? {
            Some(college) => Ok(Some(self.resolve_college(college)?)),
            None => Ok(None),
        }
    }

    /// One course, resolved; `None` when the id is unknown.
    pub fn get_course(&self, id: CourseId) -> CatalogResult<Option<CourseDetail>> {
        match self.store.get_course(id)? {
            Some(course) => Ok(Some(self.resolve_course(course)?)),
            None => Ok(None),
        }
    }

    // ── Reconciliation ────────────────────────────────────────────

    /// Reports every reference currently visible from one side only.
    pub fn check_references(&self) -> CatalogResult<Vec<ClosureViolation>> {
        Ok(reconcile::check(self.store.as_ref())?)
    }

    /// Rewrites the inverse side from the chosen authoritative side.
    pub fn repair_references(&self, authority: Authority) -> CatalogResult<RepairReport> {
        Ok(reconcile::repair(self.store.as_ref(), authority)?)
    }

    fn resolve_college(&self, college: College) -> CatalogResult<CollegeDetail> {
        let mut courses = self.store.get_courses(&college.courses_offered)?;
        courses.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(CollegeDetail { college, courses })
    }

    fn resolve_course(&self, course: Course) -> CatalogResult<CourseDetail> {
        let mut colleges = self.store.get_colleges(&course.colleges)?;
        colleges.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(CourseDetail { course, colleges })
    }
}

/// Maps a synchronizer failure after a successful primary write. The
/// caller must hear about the inconsistency, not an unconditional success.
fn sync_failure(kind: EntityKind, id: String, err: SyncError) -> CatalogError {
    match err {
        SyncError::Store { step, source } => {
            warn!(%kind, %id, %step, "primary write saved but inverse sync failed");
            CatalogError::PartialSync {
                kind,
                id,
                step,
                source,
            }
        }
        SyncError::NotFound { .. } => CatalogError::NotFound { kind, id },
    }
}
