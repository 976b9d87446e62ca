//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server and the client deserialize the same `wire` types, so request
//! and response bodies cannot drift apart.

pub use wire::{ApiFailure, Document, Report, ReportBody, RequestCodeResponse, Role, Subcategory, SubcategoryList, User};
