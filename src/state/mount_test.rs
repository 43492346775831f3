use super::*;

#[test]
fn new_session_is_active() {
    assert!(MountSession::new().is_active());
}

#[test]
fn cancel_is_shared_across_clones() {
    let session = MountSession::new();
    let handle = session.clone();
    session.cancel();
    assert!(!handle.is_active());
    assert_eq!(handle.id(), session.id());
}

#[test]
fn cancel_twice_is_harmless() {
    let session = MountSession::new();
    session.cancel();
    session.cancel();
    assert!(!session.is_active());
}

#[test]
fn sessions_get_distinct_ids() {
    let first = MountSession::new();
    let second = MountSession::default();
    assert_ne!(first.id(), second.id());
}

#[test]
fn cancelling_one_session_leaves_others_active() {
    let first = MountSession::new();
    let second = MountSession::new();
    first.cancel();
    assert!(second.is_active());
}
