// crates/ports/src/sink.rs
use std::path::PathBuf;

use line_sieve_domain::Category;
use line_sieve_shared_kernel::InfraResult;

/// Port for persisting classified lines, one target per category.
pub trait BucketSink {
    /// Make the destination ready. A failure here aborts the whole write phase.
    fn prepare(&self) -> InfraResult<()>;

    /// Write `lines` for `category`, returning where they went.
    fn write(&self, category: Category, lines: &[String]) -> InfraResult<PathBuf>;
}
