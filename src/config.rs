// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use line_sieve_domain::{ReportFormat, Verbosity};
use line_sieve_shared_kernel::{PresentationError, Result, SieveError};

use crate::cli::Args;

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    #[builder(default = "PathBuf::from(\".\")")]
    pub output_dir: PathBuf,
    #[builder(default)]
    pub prefix: String,
    #[builder(default)]
    pub append: bool,
    #[builder(default)]
    pub verbosity: Verbosity,
    #[builder(default)]
    pub format: ReportFormat,
}

impl TryFrom<Args> for Config {
    type Error = SieveError;

    fn try_from(args: Args) -> Result<Self> {
        if args.inputs.is_empty() {
            return Err(PresentationError::NoInputFiles.into());
        }

        ConfigBuilder::default()
            .inputs(args.inputs)
            .output_dir(args.output_dir)
            .prefix(args.prefix)
            .append(args.append)
            .verbosity(Verbosity::from_flags(args.short, args.full))
            .format(args.format)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
    }
}
