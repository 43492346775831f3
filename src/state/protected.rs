//! Per-mount state for the protected-resource fetch.
//!
//! DESIGN
//! ======
//! The phase only moves forward: `Idle -> Pending -> Resolved | Rejected`.
//! Terminal phases refuse further transitions, so a mount can hold at most
//! one result.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use serde_json::Value;

use crate::net::error::FetchError;

/// Outcome of one protected-resource call.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtectedResourceResult {
    Success(Value),
    Failure(FetchError),
}

impl ProtectedResourceResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<Result<Value, FetchError>> for ProtectedResourceResult {
    fn from(result: Result<Value, FetchError>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(err) => Self::Failure(err),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Idle,
    Pending,
    Resolved,
    Rejected,
}

/// Typed result slot for a mounted protected view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtectedViewState {
    pub phase: FetchPhase,
    pub result: Option<ProtectedResourceResult>,
}

impl ProtectedViewState {
    /// Move `Idle -> Pending`. Returns `false` if the fetch already started.
    pub fn begin(&mut self) -> bool {
        if self.phase != FetchPhase::Idle {
            return false;
        }
        self.phase = FetchPhase::Pending;
        true
    }

    /// Move `Pending -> Resolved | Rejected` and store the result.
    /// Returns `false` (leaving state untouched) from any other phase.
    pub fn settle(&mut self, result: ProtectedResourceResult) -> bool {
        if self.phase != FetchPhase::Pending {
            return false;
        }
        self.phase = if result.is_success() { FetchPhase::Resolved } else { FetchPhase::Rejected };
        self.result = Some(result);
        true
    }
}
