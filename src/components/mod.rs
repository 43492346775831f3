//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components here are route-independent chrome shared by every page.

pub mod footer;
