// crates/domain/src/bucket.rs
use crate::{
    classify::{Category, Classification, classify},
    stats::{NumericStats, TextStats},
};

/// Raw lines of one category in encounter order, paired with their running statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBucket<S> {
    lines: Vec<String>,
    stats: S,
}

impl<S> CategoryBucket<S> {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub const fn stats(&self) -> &S {
        &self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl CategoryBucket<NumericStats> {
    fn record(&mut self, value: f64, line: String) {
        self.stats.add(value);
        self.lines.push(line);
    }
}

impl CategoryBucket<TextStats> {
    fn record(&mut self, line: String) {
        self.stats.add(&line);
        self.lines.push(line);
    }
}

/// The three buckets of a single run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets {
    pub integers: CategoryBucket<NumericStats>,
    pub floats: CategoryBucket<NumericStats>,
    pub strings: CategoryBucket<TextStats>,
}

impl Buckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route an already classified line into its bucket, updating statistics.
    pub fn add(&mut self, classification: Classification, line: String) {
        match (classification, classification.value()) {
            (Classification::Integer(_), Some(value)) => self.integers.record(value, line),
            (Classification::Float(_), Some(value)) => self.floats.record(value, line),
            _ => self.strings.record(line),
        }
    }

    /// Classify and add `line`. Empty lines are skipped; returns the category otherwise.
    pub fn push_line(&mut self, line: String) -> Option<Category> {
        if line.is_empty() {
            return None;
        }
        let classification = classify(&line);
        self.add(classification, line);
        Some(classification.category())
    }

    /// Lines of `category`, in encounter order.
    pub fn lines(&self, category: Category) -> &[String] {
        match category {
            Category::Integer => self.integers.lines(),
            Category::Float => self.floats.lines(),
            Category::Text => self.strings.lines(),
        }
    }

    pub fn count(&self, category: Category) -> u64 {
        match category {
            Category::Integer => self.integers.stats().count(),
            Category::Float => self.floats.stats().count(),
            Category::Text => self.strings.stats().count(),
        }
    }

    pub fn total(&self) -> u64 {
        Category::ALL.iter().map(|&c| self.count(c)).sum()
    }
}
