// crates/usecase/src/pipeline.rs
use std::{
    io::BufRead,
    path::{Path, PathBuf},
};

use line_sieve_domain::Buckets;
use line_sieve_ports::source::LineSource;
use line_sieve_shared_kernel::InfrastructureError;

use crate::dto::SieveOutput;

/// Reads every input in argument order and sorts its lines into buckets.
pub struct SieveLines<'a> {
    source: &'a dyn LineSource,
}

impl<'a> SieveLines<'a> {
    pub fn new(source: &'a dyn LineSource) -> Self {
        Self { source }
    }

    /// Never fails as a whole: unreadable inputs are collected in
    /// [`SieveOutput::failures`] and the remaining inputs are still scanned.
    pub fn run(&self, paths: &[PathBuf]) -> SieveOutput {
        let mut output = SieveOutput::default();
        for path in paths {
            match self.source.open(path) {
                Ok(reader) => {
                    if let Err(err) = sieve_reader(reader, path, &mut output.buckets) {
                        log::debug!("stopped reading {}: {err}", path.display());
                        output.failures.push(err);
                    }
                }
                Err(err) => {
                    log::debug!("skipping {}: {err}", path.display());
                    output.failures.push(err);
                }
            }
        }
        log::info!(
            "classified {} lines from {} inputs ({} failed)",
            output.buckets.total(),
            paths.len(),
            output.failures.len()
        );
        output
    }
}

/// Lines read before a failure stay in `buckets`.
fn sieve_reader(
    reader: Box<dyn BufRead>,
    path: &Path,
    buckets: &mut Buckets,
) -> Result<(), InfrastructureError> {
    let mut routed = 0usize;
    for line in reader.lines() {
        let line = line.map_err(|source| InfrastructureError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        if buckets.push_line(line).is_some() {
            routed += 1;
        }
    }
    log::debug!("{}: {routed} lines routed", path.display());
    Ok(())
}
