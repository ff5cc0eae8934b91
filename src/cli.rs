// src/cli.rs
use std::{ffi::OsString, path::PathBuf};

use clap::{Parser, ValueHint};
use line_sieve_domain::ReportFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "line_sieve",
    version = crate::VERSION,
    about = "Split lines of text files into integers, floats and strings",
    args_override_self = true
)]
pub struct Args {
    /// Directory for the category files (created with parents if missing)
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        allow_hyphen_values = true,
        value_hint = ValueHint::DirPath
    )]
    pub output_dir: PathBuf,

    /// Prefix prepended to integers.txt, floats.txt and strings.txt
    #[arg(short = 'p', long, value_name = "PREFIX", default_value = "", allow_hyphen_values = true)]
    pub prefix: String,

    /// Append to existing output files instead of overwriting them
    #[arg(short = 'a', long)]
    pub append: bool,

    /// Print per-category counts after processing
    #[arg(short = 's', long)]
    pub short: bool,

    /// Print full statistics after processing (implies the counts)
    #[arg(short = 'f', long)]
    pub full: bool,

    /// Statistics rendering: text or json
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: ReportFormat,

    /// Input files, read in the given order. Any argument that is not one of
    /// the options above is taken as a file name.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,
}

const SWITCHES: &[&str] = &[
    "-a", "--append", "-s", "--short", "-f", "--full", "-h", "--help", "-V", "--version",
];
const VALUED: &[&str] = &["-o", "--output-dir", "-p", "--prefix", "--format"];

impl Args {
    /// Parse the process arguments; clap exits on usage errors.
    pub fn from_env() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Like [`Parser::try_parse_from`], but with the file-name fallback applied.
    pub fn try_parse_lenient<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(argv))
    }
}

/// Reorders `argv` so that clap only sees the recognised options.
///
/// Exact option tokens are kept, and the argument following a valued option is
/// attached with `=` so that it is taken verbatim even when it starts with `-`.
/// Every other argument, including unknown flags, ends up after `--` as an
/// input file, in its original order. A valued option with nothing after it
/// goes last, with no files behind it, so clap reports the missing value.
pub fn normalize_args<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let mut options: Vec<OsString> = argv.next().into_iter().collect();
    let mut files = Vec::new();

    while let Some(arg) = argv.next() {
        let Some(text) = arg.to_str() else {
            files.push(arg);
            continue;
        };
        if SWITCHES.contains(&text) {
            options.push(arg);
        } else if let Some(flag) = VALUED.iter().find(|flag| **flag == text) {
            match argv.next() {
                Some(value) => options.push(attach_value(flag, value)),
                None => {
                    options.push(arg);
                    return options;
                }
            }
        } else if is_inline_value(text) {
            options.push(arg);
        } else if text == "--" {
            files.extend(argv.by_ref());
        } else {
            files.push(arg);
        }
    }

    if !files.is_empty() {
        options.push(OsString::from("--"));
        options.extend(files);
    }
    options
}

fn attach_value(flag: &str, value: OsString) -> OsString {
    let long = match flag {
        "-o" => "--output-dir",
        "-p" => "--prefix",
        other => other,
    };
    let mut joined = OsString::from(format!("{long}="));
    joined.push(value);
    joined
}

fn is_inline_value(text: &str) -> bool {
    ["--output-dir=", "--prefix=", "--format="].iter().any(|prefix| text.starts_with(prefix))
}
