//! Client-side state for mounted views.
//!
//! DESIGN
//! ======
//! `mount` tracks whether a view instance is still attached; `protected`
//! holds the per-mount fetch phase and its typed result.

pub mod mount;
pub mod protected;
