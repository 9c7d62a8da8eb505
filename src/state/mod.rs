//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`, `search`) so components depend on
//! small focused models and every transition is testable without a document.

pub mod auth;
pub mod search;
pub mod ui;
