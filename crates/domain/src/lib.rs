//! # Domain
//!
//! Pure rules of the line census: which files count as code, what a
//! counted file looks like, and how results are ordered and totalled.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod classifier;
pub mod model;

pub use analytics::{Summary, sort_by_lines};
pub use classifier::{RECOGNIZED_EXTENSIONS, extension_of, is_code_file};
pub use model::FileRecord;
