//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome,
//! guards and containment to `components`.

pub mod account;
pub mod admin;
pub mod home;
pub mod legal;
pub mod login;
pub mod menu;
pub mod not_found;
pub mod pos;
pub mod vendor_portal;
