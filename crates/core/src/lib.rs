//! Domain model for landing pages.
//!
//! Content blocks and their factory defaults, property edits, editor
//! session state, and read-only page projections. This crate has no I/O
//! and no async; everything operates on owned value types so the HTTP
//! layer and its tests can drive the same logic.

pub mod block;
pub mod edit;
pub mod error;
pub mod factory;
pub mod page;
pub mod preview;
pub mod session;
pub mod types;
