// src/app.rs
use line_sieve_domain::Buckets;
use line_sieve_infra::{FsBucketWriter, FsLineSource};
use line_sieve_shared_kernel::{ErrorContext, Result};
use line_sieve_usecase::{PersistBuckets, SieveLines};

use crate::{config::Config, presentation};

/// Classify every input and write the category files.
///
/// Per-file problems are printed and skipped. The only error returned is a
/// failure to create the output directory, which happens before anything is
/// written. The filled buckets are handed back for reporting.
pub fn run(config: &Config) -> Result<Buckets> {
    let source = FsLineSource;
    let sieved = SieveLines::new(&source).run(&config.inputs);
    for failure in &sieved.failures {
        presentation::print_failure(failure);
    }

    let sink = FsBucketWriter::new(&config.output_dir, config.prefix.as_str(), config.append);
    let persisted = PersistBuckets::new(&sink)
        .run(&sieved.buckets)
        .context("cannot write results")?;
    for failure in &persisted.failures {
        presentation::print_failure(failure);
    }
    log::info!("{} output files written", persisted.written.len());

    Ok(sieved.buckets)
}
