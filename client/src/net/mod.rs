//! Networking modules for REST calls and auth-session delivery.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `auth_service` turns the session endpoint into
//! an ordered identity feed, and `types` defines the shared wire schema.

pub mod api;
pub mod auth_service;
pub mod types;
