// crates/infra/src/measurement.rs
pub mod newline;

pub use newline::NewlineCounter;
