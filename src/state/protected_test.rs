use super::*;

fn unauthorized() -> FetchError {
    FetchError::Authorization { status: 401, message: "Unauthorized".to_owned() }
}

// =============================================================
// ProtectedViewState transitions
// =============================================================

#[test]
fn default_state_is_idle_without_result() {
    let state = ProtectedViewState::default();
    assert_eq!(state.phase, FetchPhase::Idle);
    assert!(state.result.is_none());
}

#[test]
fn begin_moves_idle_to_pending_once() {
    let mut state = ProtectedViewState::default();
    assert!(state.begin());
    assert_eq!(state.phase, FetchPhase::Pending);
    assert!(!state.begin());
    assert_eq!(state.phase, FetchPhase::Pending);
}

#[test]
fn settle_success_resolves() {
    let mut state = ProtectedViewState::default();
    state.begin();
    assert!(state.settle(ProtectedResourceResult::Success(serde_json::json!({ "id": 1 }))));
    assert_eq!(state.phase, FetchPhase::Resolved);
    assert_eq!(state.result, Some(ProtectedResourceResult::Success(serde_json::json!({ "id": 1 }))));
}

#[test]
fn settle_failure_rejects() {
    let mut state = ProtectedViewState::default();
    state.begin();
    assert!(state.settle(ProtectedResourceResult::Failure(unauthorized())));
    assert_eq!(state.phase, FetchPhase::Rejected);
}

#[test]
fn settle_before_begin_is_refused() {
    let mut state = ProtectedViewState::default();
    assert!(!state.settle(ProtectedResourceResult::Success(serde_json::Value::Null)));
    assert_eq!(state, ProtectedViewState::default());
}

#[test]
fn terminal_state_keeps_first_result() {
    let mut state = ProtectedViewState::default();
    state.begin();
    state.settle(ProtectedResourceResult::Failure(unauthorized()));
    assert!(!state.settle(ProtectedResourceResult::Success(serde_json::Value::Null)));
    assert!(!state.begin());
    assert_eq!(state.phase, FetchPhase::Rejected);
    assert_eq!(state.result, Some(ProtectedResourceResult::Failure(unauthorized())));
}

// =============================================================
// ProtectedResourceResult helpers
// =============================================================

#[test]
fn result_from_std_result() {
    let ok: ProtectedResourceResult = Ok(serde_json::json!([1, 2])).into();
    assert!(ok.is_success());
    let err: ProtectedResourceResult = Err(FetchError::decoding("eof")).into();
    assert!(!err.is_success());
}
