// crates/shared-kernel/src/lib.rs

pub use error::{
    ErrorContext, InfraResult, InfrastructureError, PresentationError, Result, SieveError,
};

pub mod error;
