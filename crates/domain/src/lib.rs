// crates/domain/src/lib.rs

pub mod bucket;
pub mod classify;
pub mod options;
pub mod stats;

pub use bucket::{Buckets, CategoryBucket};
pub use classify::{Category, Classification, classify};
pub use options::{ReportFormat, Verbosity};
pub use stats::{NumericStats, TextStats};
