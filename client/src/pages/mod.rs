//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages gate their content on
//! `util::guard::use_protected_route`.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod report;
pub mod subcategories;
