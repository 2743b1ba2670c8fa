//! Common utilities for the Folio renderer.
//!
//! This crate provides shared infrastructure used by all renderer components:
//! - **Warning System** - deduplicated warnings routed through the `log` facade

pub mod warning;
