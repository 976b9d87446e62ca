//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `notifications`) so providers and
//! pages can depend on small focused models. Both are plain data; the
//! provider components wrap them in `RwSignal` context.

pub mod auth;
pub mod notifications;
