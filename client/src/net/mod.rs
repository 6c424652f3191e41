//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends REST requests against the configured base URL;
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
