// crates/domain/src/analytics.rs
pub mod aggregate;
pub mod sort;

pub use aggregate::Summary;
pub use sort::sort_by_lines;
