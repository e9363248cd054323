//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and containment surfaces while reading
//! shared session state from Leptos context.

pub mod fault_boundary;
pub mod footer;
pub mod header;
pub mod layout;
pub mod require_session;
