// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
};

use line_sieve_ports::source::LineSource;
use line_sieve_shared_kernel::{InfraResult, InfrastructureError};

/// Opens input files from the local filesystem with buffered reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLineSource;

impl FsLineSource {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path).map(BufReader::new).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                InfrastructureError::SourceNotFound { path: path.to_path_buf() }
            } else {
                InfrastructureError::SourceRead { path: path.to_path_buf(), source }
            }
        })
    }
}

impl LineSource for FsLineSource {
    fn open(&self, path: &Path) -> InfraResult<Box<dyn BufRead>> {
        let reader = Self::open_buffered(path)?;
        log::debug!("opened {}", path.display());
        Ok(Box::new(reader))
    }
}
