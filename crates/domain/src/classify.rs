// crates/domain/src/classify.rs
use std::fmt;

use serde::Serialize;

/// The three kinds of line the sieve separates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Integer,
    Float,
    Text,
}

impl Category {
    /// Display and output order.
    pub const ALL: [Self; 3] = [Self::Integer, Self::Float, Self::Text];

    /// Fixed output file name, before the user prefix is applied.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Integer => "integers.txt",
            Self::Float => "floats.txt",
            Self::Text => "strings.txt",
        }
    }

    /// Heading used by the statistics report.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Integer => "Integers",
            Self::Float => "Floats",
            Self::Text => "Strings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying one non-empty line, carrying the parsed value for numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    Integer(i64),
    Float(f64),
    Text,
}

impl Classification {
    pub const fn category(&self) -> Category {
        match self {
            Self::Integer(_) => Category::Integer,
            Self::Float(_) => Category::Float,
            Self::Text => Category::Text,
        }
    }

    /// Numeric payload widened to `f64`; `None` for text.
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self) -> Option<f64> {
        match *self {
            Self::Integer(v) => Some(v as f64),
            Self::Float(v) => Some(v),
            Self::Text => None,
        }
    }
}

/// Classify a line without trimming it.
///
/// Integers win over floats. A float only counts when the text shows float
/// syntax (a `.` or an exponent marker), so `"5"` can never land in the float
/// bucket and `"inf"`/`"NaN"` fall through to text.
pub fn classify(line: &str) -> Classification {
    if let Ok(v) = line.parse::<i64>() {
        return Classification::Integer(v);
    }
    if has_float_syntax(line)
        && let Ok(v) = line.parse::<f64>()
    {
        return Classification::Float(v);
    }
    Classification::Text
}

fn has_float_syntax(line: &str) -> bool {
    line.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
}
