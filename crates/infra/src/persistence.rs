// crates/infra/src/persistence.rs
pub mod file_reader;
pub mod file_writer;
