//! Test fixtures for campus-router.
//!
//! Provides:
//! - A builder for small synthetic campuses
//! - A walking network laid out over a university campus in Concepción

pub mod campus_builder;
pub mod concepcion_campus;

#[allow(unused_imports)]
pub use campus_builder::*;
