// crates/infra/src/lib.rs

pub mod persistence;

pub use persistence::{file_reader::FsLineSource, file_writer::FsBucketWriter};
