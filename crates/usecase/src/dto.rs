// crates/usecase/src/dto.rs
use std::path::PathBuf;

use line_sieve_domain::{Buckets, Category};
use line_sieve_shared_kernel::InfrastructureError;

/// Outcome of scanning all inputs.
#[derive(Debug, Default)]
pub struct SieveOutput {
    pub buckets: Buckets,
    /// Per-input failures in the order they happened. None of them stopped the run.
    pub failures: Vec<InfrastructureError>,
}

/// Outcome of the write phase once the destination was prepared.
#[derive(Debug, Default)]
pub struct PersistOutput {
    pub written: Vec<(Category, PathBuf)>,
    pub failures: Vec<InfrastructureError>,
}
