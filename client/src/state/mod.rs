//! Client-side state modules.

pub mod auth;
pub mod menu;
