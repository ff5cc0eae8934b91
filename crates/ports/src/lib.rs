//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: opening input files as line streams
//! - [`sink`]: persisting the classified lines of each category
//!
//! These ports keep the pipeline independent of the filesystem.

// crates/ports/src/lib.rs

pub mod sink;
pub mod source;
