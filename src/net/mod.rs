//! Networking modules for authenticated REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` defines the injected `AuthenticatedClient` capability and its
//! browser implementation; `error` defines the failure taxonomy every call
//! resolves to.

pub mod client;
pub mod error;
