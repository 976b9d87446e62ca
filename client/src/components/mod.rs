//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The providers (`session_provider`, `notification_provider`) own shared
//! state and publish it through Leptos context. `layout` composes them with
//! `error_boundary` and the page frame around every route.

pub mod error_boundary;
pub mod layout;
pub mod notification_provider;
pub mod session_provider;
