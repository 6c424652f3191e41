//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Only `login`, `register` and `not_found` render without
//! a session; everything else mounts under `ProtectedLayout`.

pub mod home;
pub mod login;
pub mod not_found;
pub mod placeholders;
pub mod profile;
pub mod register;
