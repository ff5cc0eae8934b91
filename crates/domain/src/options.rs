// crates/domain/src/options.rs
use std::str::FromStr;

/// How much of the statistics report to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    None,
    Short,
    Full,
}

impl Verbosity {
    /// Resolve the `-s`/`-f` switches. Full detail wins when both are given.
    pub const fn from_flags(short: bool, full: bool) -> Self {
        match (short, full) {
            (_, true) => Self::Full,
            (true, false) => Self::Short,
            (false, false) => Self::None,
        }
    }
}

/// Rendering used for the statistics report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown report format: {other}")),
        }
    }
}
