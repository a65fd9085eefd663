//! ocuscore-export
//!
//! Clinical report envelope and Markdown summary rendering.

pub mod error;
pub mod render;
pub mod report;

pub use render::{DEFAULT_SUMMARY_TEMPLATE, render_summary};
pub use report::{ClinicalReport, to_json};
