use campus_model::{College, CollegeFields, Course, CourseFields};
use campus_store::{CatalogStore, FaultStore, MemoryStore, StoreError};
use campus_types::Region;
use std::collections::HashSet;
use std::sync::Arc;

fn wrapped() -> (Arc<MemoryStore>, FaultStore) {
    let backend = Arc::new(MemoryStore::new());
    let fault = FaultStore::new(backend.clone());
    (backend, fault)
}

fn college(name: &str) -> College {
    College::create(
        CollegeFields {
            name: name.to_string(),
            location: "Delhi".to_string(),
            region: Region::India,
            description: String::new(),
            image: String::new(),
        },
        HashSet::new(),
    )
}

fn course(name: &str) -> Course {
    Course::create(
        CourseFields {
            name: name.to_string(),
            level: "Bachelor".to_string(),
            eligibility: "10+2".to_string(),
        },
        HashSet::new(),
    )
}

// ── Pass-through ──────────────────────────────────────────────────

#[test]
fn without_hook_calls_reach_the_backend() {
    let (backend, fault) = wrapped();
    let c = college("Alpha College");
    fault.insert_college(&c).unwrap();

    assert!(backend.get_college(c.id).unwrap().is_some());
    assert!(fault.get_college(c.id).unwrap().is_some());
}

// ── Failure injection ─────────────────────────────────────────────

#[test]
fn fail_on_aborts_before_the_backend_sees_the_write() {
    let (backend, fault) = wrapped();
    fault.fail_on("insert_college");

    let c = college("Alpha College");
    let err = fault.insert_college(&c).unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
    assert!(backend.get_college(c.id).unwrap().is_none());
}

#[test]
fn fail_on_leaves_other_mutations_alone() {
    let (_, fault) = wrapped();
    fault.fail_on("push_college_to_courses");

    let k = course("B.Tech");
    fault.insert_course(&k).unwrap();
    assert!(fault.get_course(k.id).unwrap().is_some());
}

#[test]
fn clear_hook_restores_pass_through() {
    let (_, fault) = wrapped();
    fault.fail_on("insert_college");
    fault.clear_hook();

    fault.insert_college(&college("Alpha College")).unwrap();
}

#[test]
fn reads_are_never_intercepted() {
    let (_, fault) = wrapped();
    let c = college("Alpha College");
    fault.insert_college(&c).unwrap();

    fault.set_hook(|op| panic!("read intercepted as {op}"));
    assert!(fault.get_college(c.id).unwrap().is_some());
    assert_eq!(fault.list_colleges().unwrap().len(), 1);
}

// ── Reentrancy ────────────────────────────────────────────────────

#[test]
fn hook_may_reenter_the_store_without_recursing() {
    let backend = Arc::new(MemoryStore::new());
    let fault = Arc::new(FaultStore::new(backend.clone()));
    let k = course("B.Tech");
    fault.insert_course(&k).unwrap();

    // On the next course insert, sneak a second insert in through the same
    // wrapper; the hook is disarmed while it runs, so this must not recurse.
    let reentrant = fault.clone();
    let sneak = course("MBA");
    let sneak_clone = sneak.clone();
    let mut fired = false;
    fault.set_hook(move |op| {
        if op == "insert_course" && !fired {
            fired = true;
            reentrant.insert_course(&sneak_clone)?;
        }
        Ok(())
    });

    let third = course("PhD");
    fault.insert_course(&third).unwrap();

    assert!(backend.get_course(sneak.id).unwrap().is_some());
    assert!(backend.get_course(third.id).unwrap().is_some());
}

#[test]
fn hook_state_persists_across_calls() {
    let (_, fault) = wrapped();
    let mut remaining = 2u32;
    fault.set_hook(move |op| {
        if op == "insert_course" && remaining > 0 {
            remaining -= 1;
            return Err(StoreError::Unavailable("flaky".to_string()));
        }
        Ok(())
    });

    let k = course("B.Tech");
    assert!(fault.insert_course(&k).is_err());
    assert!(fault.insert_course(&k).is_err());
    fault.insert_course(&k).unwrap();
}
