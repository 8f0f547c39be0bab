//! Closure-invariant check and repair.
//!
//! Partial failures and racing updates can leave a reference visible from
//! one side only. There is no automatic retry, so repair is an explicit
//! out-of-band pass: pick one side as ground truth, rewrite the other
//! side's sets from it, and prune ground-truth references that point at
//! records which no longer exist.

use campus_store::{CatalogStore, StoreResult};
use campus_types::{CollegeId, CourseId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Which collection's forward sets are ground truth during repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Authority {
    Colleges,
    Courses,
}

/// A reference pair observed from exactly one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureViolation {
    pub college: CollegeId,
    pub course: CourseId,
    pub seen_from: Side,
}

/// The side on which the one-sided reference was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The college lists the course; the course does not list it back
    /// (or no such course exists).
    CollegeOnly,
    /// The course lists the college; the college does not list it back
    /// (or no such college exists).
    CourseOnly,
}

/// What a repair pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairReport {
    /// Inverse-side records whose reference set was rewritten.
    pub inverse_rewrites: u64,
    /// Ground-truth records whose forward set referenced a record that no
    /// longer exists and was pruned.
    pub dangling_pruned: u64,
}

impl RepairReport {
    /// Whether the pass found nothing to fix.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.inverse_rewrites == 0 && self.dangling_pruned == 0
    }
}

/// Reports every closure violation currently in the store.
///
/// Read-only; both collections are listed once and compared in memory. A
/// concurrent writer can invalidate the answer by the time it is returned,
/// so run this from the same maintenance window as [`repair`].
pub fn check(store: &dyn CatalogStore) -> StoreResult<Vec<ClosureViolation>> {
    let colleges = store.list_colleges()?;
    let courses = store.list_courses()?;

    let course_refs: HashMap<CourseId, &HashSet<CollegeId>> =
        courses.iter().map(|k| (k.id, &k.colleges)).collect();
    let college_refs: HashMap<CollegeId, &HashSet<CourseId>> =
        colleges.iter().map(|c| (c.id, &c.courses_offered)).collect();

    let mut violations = Vec::new();
    for college in &colleges {
        for &course in &college.courses_offered {
            let linked_back = course_refs
                .get(&course)
                .is_some_and(|refs| refs.contains(&college.id));
            if !linked_back {
                violations.push(ClosureViolation {
                    college: college.id,
                    course,
                    seen_from: Side::CollegeOnly,
                });
            }
        }
    }
    for course in &courses {
        for &college in &course.colleges {
            let linked_back = college_refs
                .get(&college)
                .is_some_and(|refs| refs.contains(&course.id));
            if !linked_back {
                violations.push(ClosureViolation {
                    college,
                    course: course.id,
                    seen_from: Side::CourseOnly,
                });
            }
        }
    }

    debug!(count = violations.len(), "closure check finished");
    Ok(violations)
}

/// Rewrites the inverse side from the authoritative side's forward sets,
/// restoring the closure invariant.
///
/// Authoritative forward references to records that no longer exist cannot
/// be honored and are pruned. After a successful pass [`check`] reports no
/// violations, assuming no concurrent writers.
pub fn repair(store: &dyn CatalogStore, authority: Authority) -> StoreResult<RepairReport> {
    let report = match authority {
        Authority::Colleges => repair_courses_from_colleges(store)?,
        Authority::Courses => repair_colleges_from_courses(store)?,
    };
    info!(
        ?authority,
        rewrites = report.inverse_rewrites,
        pruned = report.dangling_pruned,
        "reconciliation pass finished"
    );
    Ok(report)
}

fn repair_courses_from_colleges(store: &dyn CatalogStore) -> StoreResult<RepairReport> {
    let colleges = store.list_colleges()?;
    let courses = store.list_courses()?;
    let existing: HashSet<CourseId> = courses.iter().map(|k| k.id).collect();

    // Ground truth: which colleges claim each course.
    let mut truth: HashMap<CourseId, HashSet<CollegeId>> = HashMap::new();
    for college in &colleges {
        for &course in &college.courses_offered {
            if existing.contains(&course) {
                truth.entry(course).or_default().insert(college.id);
            }
        }
    }

    let mut report = RepairReport::default();
    for course in &courses {
        let expected = truth.remove(&course.id).unwrap_or_default();
        if course.colleges != expected {
            store.set_colleges(course.id, &expected)?;
            report.inverse_rewrites += 1;
        }
    }

    // Forward references to courses that no longer exist.
    for college in &colleges {
        let kept: HashSet<CourseId> = college
            .courses_offered
            .iter()
            .copied()
            .filter(|course| existing.contains(course))
            .collect();
        if kept != college.courses_offered {
            store.set_courses_offered(college.id, &kept)?;
            report.dangling_pruned += 1;
        }
    }
    Ok(report)
}

fn repair_colleges_from_courses(store: &dyn CatalogStore) -> StoreResult<RepairReport> {
    let colleges = store.list_colleges()?;
    let courses = store.list_courses()?;
    let existing: HashSet<CollegeId> = colleges.iter().map(|c| c.id).collect();

    let mut truth: HashMap<CollegeId, HashSet<CourseId>> = HashMap::new();
    for course in &courses {
        for &college in &course.colleges {
            if existing.contains(&college) {
                truth.entry(college).or_default().insert(course.id);
            }
        }
    }

    let mut report = RepairReport::default();
    for college in &colleges {
        let expected = truth.remove(&college.id).unwrap_or_default();
        if college.courses_offered != expected {
            store.set_courses_offered(college.id, &expected)?;
            report.inverse_rewrites += 1;
        }
    }

    for course in &courses {
        let kept: HashSet<CollegeId> = course
            .colleges
            .iter()
            .copied()
            .filter(|college| existing.contains(college))
            .collect();
        if kept != course.colleges {
            store.set_colleges(course.id, &kept)?;
            report.dangling_pruned += 1;
        }
    }
    Ok(report)
}
