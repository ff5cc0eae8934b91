// crates/usecase/src/persist.rs
use line_sieve_domain::{Buckets, Category};
use line_sieve_ports::sink::BucketSink;
use line_sieve_shared_kernel::InfraResult;

use crate::dto::PersistOutput;

/// Writes every non-empty bucket through a [`BucketSink`].
pub struct PersistBuckets<'a> {
    sink: &'a dyn BucketSink,
}

impl<'a> PersistBuckets<'a> {
    pub fn new(sink: &'a dyn BucketSink) -> Self {
        Self { sink }
    }

    /// Fails only when the sink cannot be prepared; in that case nothing is written.
    /// Per-category write errors are collected and the other categories are still attempted.
    pub fn run(&self, buckets: &Buckets) -> InfraResult<PersistOutput> {
        self.sink.prepare()?;

        let mut output = PersistOutput::default();
        for category in Category::ALL {
            let lines = buckets.lines(category);
            if lines.is_empty() {
                continue;
            }
            match self.sink.write(category, lines) {
                Ok(path) => {
                    log::debug!("wrote {} {category} lines to {}", lines.len(), path.display());
                    output.written.push((category, path));
                }
                Err(err) => output.failures.push(err),
            }
        }
        Ok(output)
    }
}
