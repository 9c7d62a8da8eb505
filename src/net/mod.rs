//! Networking modules for the account API and page fragments.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `types` defines the wire schema, and `error`
//! classifies failures into the inline messages the UI shows.

pub mod api;
pub mod error;
pub mod types;
