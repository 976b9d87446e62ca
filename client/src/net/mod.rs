//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the server's `/api` routes and `types`
//! re-exports the shared JSON schema from the `wire` crate.

pub mod api;
pub mod types;
