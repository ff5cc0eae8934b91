// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use line_sieve_domain::Category;
use line_sieve_ports::sink::BucketSink;
use line_sieve_shared_kernel::{InfraResult, InfrastructureError};

/// Writes each category to `<dir>/<prefix><category file>`, one line per entry.
#[derive(Debug, Clone)]
pub struct FsBucketWriter {
    dir: PathBuf,
    prefix: String,
    append: bool,
}

impl FsBucketWriter {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, append: bool) -> Self {
        Self { dir: dir.into(), prefix: prefix.into(), append }
    }

    /// Target file for `category`.
    pub fn path_for(&self, category: Category) -> PathBuf {
        self.dir.join(format!("{}{}", self.prefix, category.file_name()))
    }

    /// Create a buffered writer targeting `path`, truncating unless appending.
    fn open(&self, path: &Path) -> std::io::Result<BufWriter<File>> {
        OpenOptions::new()
            .create(true)
            .write(true)
            .append(self.append)
            .truncate(!self.append)
            .open(path)
            .map(BufWriter::new)
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> std::io::Result<()> {
        let mut w = self.open(path)?;
        for line in lines {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
        }
        w.flush()
    }
}

impl BucketSink for FsBucketWriter {
    fn prepare(&self) -> InfraResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| InfrastructureError::OutputDir {
            path: self.dir.clone(),
            source,
        })
    }

    fn write(&self, category: Category, lines: &[String]) -> InfraResult<PathBuf> {
        let path = self.path_for(category);
        self.write_lines(&path, lines)
            .map_err(|source| InfrastructureError::OutputWrite { path: path.clone(), source })?;
        log::debug!("{} lines -> {} (append={})", lines.len(), path.display(), self.append);
        Ok(path)
    }
}
