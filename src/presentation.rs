// src/presentation.rs
use std::{
    fmt,
    io::{self, Write},
};

use line_sieve_domain::{Buckets, Category, NumericStats, ReportFormat, TextStats, Verbosity};
use line_sieve_shared_kernel::InfrastructureError;
use serde_json::{Map, Value, json};

/// Print the statistics report to stdout.
pub fn print_report(buckets: &Buckets, verbosity: Verbosity, format: ReportFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, buckets, verbosity, format)?;
    out.flush()
}

/// Print a per-file problem that did not stop the run.
pub fn print_failure(err: &InfrastructureError) {
    eprintln!("[line_sieve] {err}");
}

pub fn write_report<W: Write>(
    out: &mut W,
    buckets: &Buckets,
    verbosity: Verbosity,
    format: ReportFormat,
) -> io::Result<()> {
    if verbosity == Verbosity::None {
        return Ok(());
    }
    match format {
        ReportFormat::Text => write_text(out, buckets, verbosity),
        ReportFormat::Json => write_json(out, buckets, verbosity),
    }
}

fn write_text<W: Write>(out: &mut W, buckets: &Buckets, verbosity: Verbosity) -> io::Result<()> {
    let full = verbosity == Verbosity::Full;
    write_numeric(out, Category::Integer, buckets.integers.stats(), full)?;
    write_numeric(out, Category::Float, buckets.floats.stats(), full)?;
    write_strings(out, buckets.strings.stats(), full)
}

fn write_numeric<W: Write>(out: &mut W, category: Category, stats: &NumericStats, full: bool) -> io::Result<()> {
    writeln!(out, "{category}: count = {}", stats.count())?;
    if full && let (Some(min), Some(max)) = (stats.min(), stats.max()) {
        writeln!(out, "  min = {}", Decimal(min))?;
        writeln!(out, "  max = {}", Decimal(max))?;
        writeln!(out, "  sum = {}", Decimal(stats.sum()))?;
        writeln!(out, "  avg = {}", Decimal(stats.average()))?;
    }
    Ok(())
}

/// Shortest round-trip form, but whole numbers keep a `.0` (`12.0`, not `12`).
struct Decimal(f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 {
            write!(f, "{value:.1}")
        } else {
            write!(f, "{value}")
        }
    }
}

fn write_strings<W: Write>(out: &mut W, stats: &TextStats, full: bool) -> io::Result<()> {
    writeln!(out, "{}: count = {}", Category::Text, stats.count())?;
    if full && let (Some(min), Some(max)) = (stats.min_len(), stats.max_len()) {
        writeln!(out, "  min length = {min}")?;
        writeln!(out, "  max length = {max}")?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, buckets: &Buckets, verbosity: Verbosity) -> io::Result<()> {
    let full = verbosity == Verbosity::Full;
    let mut report = Map::new();
    report.insert(json_key(Category::Integer), numeric_json(buckets.integers.stats(), full)?);
    report.insert(json_key(Category::Float), numeric_json(buckets.floats.stats(), full)?);
    let strings = if full && !buckets.strings.is_empty() {
        serde_json::to_value(buckets.strings.stats())?
    } else {
        json!({ "count": buckets.strings.stats().count() })
    };
    report.insert(json_key(Category::Text), strings);

    serde_json::to_writer_pretty(&mut *out, &Value::Object(report))?;
    writeln!(out)
}

fn numeric_json(stats: &NumericStats, full: bool) -> io::Result<Value> {
    if !full || stats.is_empty() {
        return Ok(json!({ "count": stats.count() }));
    }
    let mut value = serde_json::to_value(stats)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("avg".to_string(), json!(stats.average()));
    }
    Ok(value)
}

fn json_key(category: Category) -> String {
    category.label().to_ascii_lowercase()
}
