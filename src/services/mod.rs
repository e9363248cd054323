//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and provider concerns so route
//! handlers can stay focused on protocol translation.

pub mod description;
