//! ocuscore-core
//!
//! Pure domain types for post-operative eye-surgery risk assessment.
//! No scoring logic lives here; this is the shared vocabulary of the
//! engine, the intake adapters and the report exporter.

pub mod error;
pub mod models;
