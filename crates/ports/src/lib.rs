//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Directory traversal yielding counted files
//! - [`measurement`]: Line counting for a single file
//! - [`diagnostics`]: Reporting of recovered, per-file problems
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod filesystem;
pub mod measurement;
