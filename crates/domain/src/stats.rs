// crates/domain/src/stats.rs
use serde::Serialize;

/// Running count/sum/min/max over numeric lines.
///
/// `min` and `max` are `None` exactly while `count` is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NumericStats {
    count: u64,
    sum: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<f64>,
}

impl NumericStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        if self.min.is_none_or(|min| value < min) {
            self.min = Some(value);
        }
        if self.max.is_none_or(|max| value > max) {
            self.max = Some(value);
        }
    }

    pub const fn count(&self) -> u64 {
        self.count
    }

    pub const fn sum(&self) -> f64 {
        self.sum
    }

    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    pub const fn max(&self) -> Option<f64> {
        self.max
    }

    /// Mean of the observed values, `0.0` when nothing was added.
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.sum / self.count as f64 }
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Running count and min/max character length over text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    count: u64,
    #[serde(rename = "min_length", skip_serializing_if = "Option::is_none")]
    min_len: Option<usize>,
    #[serde(rename = "max_length", skip_serializing_if = "Option::is_none")]
    max_len: Option<usize>,
}

impl TextStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `line`, measuring it in characters rather than bytes.
    pub fn add(&mut self, line: &str) {
        let len = line.chars().count();
        self.count += 1;
        if self.min_len.is_none_or(|min| len < min) {
            self.min_len = Some(len);
        }
        if self.max_len.is_none_or(|max| len > max) {
            self.max_len = Some(len);
        }
    }

    pub const fn count(&self) -> u64 {
        self.count
    }

    pub const fn min_len(&self) -> Option<usize> {
        self.min_len
    }

    pub const fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}
