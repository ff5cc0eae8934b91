//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`pipeline`]: read every input, classify its lines and fill the buckets
//! - [`persist`]: hand the filled buckets to an output sink
//! - [`dto`]: results crossing the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

pub mod dto;
pub mod persist;
pub mod pipeline;

pub use dto::{PersistOutput, SieveOutput};
pub use persist::PersistBuckets;
pub use pipeline::SieveLines;
