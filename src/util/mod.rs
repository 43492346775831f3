//! Shared helpers used by views and the HTTP client.

pub mod observe;
pub mod storage;
