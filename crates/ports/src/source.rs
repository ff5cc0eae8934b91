// crates/ports/src/source.rs
use std::{io::BufRead, path::Path};

use line_sieve_shared_kernel::InfraResult;

/// Port for opening an input as a buffered line stream.
///
/// Implementations report a missing input as `SourceNotFound` and any other
/// failure to open it as `SourceRead`.
pub trait LineSource {
    fn open(&self, path: &Path) -> InfraResult<Box<dyn BufRead>>;
}
