//! Mount sessions: cancellation scopes tied to a view instance.
//!
//! SYSTEM CONTEXT
//! ==============
//! A view creates one session when its body runs and cancels it from
//! `on_cleanup`. Async work spawned on mount checks the session before acting
//! on a result, so a response that lands after unmount is dropped.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// One attachment of a view instance. Clones share the same cancellation flag.
#[derive(Debug, Clone)]
pub struct MountSession {
    id: u64,
    active: Arc<AtomicBool>,
}

impl MountSession {
    pub fn new() -> Self {
        Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Mark the owning view as gone. Idempotent.
    pub fn cancel(&self) {
        self.active.store(false, Ordering::Relaxed);
    }
}

impl Default for MountSession {
    fn default() -> Self {
        Self::new()
    }
}
