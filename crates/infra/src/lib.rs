//! # Infrastructure
//!
//! Filesystem adapters implementing the ports:
//!
//! - [`filesystem`]: recursive and shallow scanners ([`WalkScanner`])
//! - [`measurement`]: newline counting ([`NewlineCounter`])
//! - [`persistence`]: file opening helpers

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod measurement;
pub mod persistence;

pub use filesystem::WalkScanner;
pub use measurement::NewlineCounter;
