use std::fmt;
use std::num::NonZeroUsize;

pub const DEFAULT_RANGE_START: i64 = -9;
pub const DEFAULT_RANGE_END: i64 = 9;
pub const DEFAULT_ARITY: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(arity) => arity,
    None => unreachable!(),
};
pub const DEFAULT_OUTPUT_FILE: &str = "vectors.txt";

/// Inclusive integer range. Empty when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub start: i64,
    pub end: i64,
}

impl ValueRange {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub const fn default_range() -> Self {
        Self::new(DEFAULT_RANGE_START, DEFAULT_RANGE_END)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end.abs_diff(self.start).saturating_add(1)
        }
    }

    pub fn values(&self) -> std::ops::RangeInclusive<i64> {
        self.start..=self.end
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::default_range()
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector(Vec<i64>);

impl Vector {
    pub fn components(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl From<Vec<i64>> for Vector {
    fn from(components: Vec<i64>) -> Self {
        Self(components)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: String,
    pub vectors_written: u64,
}

impl GenerationReport {
    /// The line printed on stdout after a successful run.
    pub fn confirmation(&self) -> String {
        format!("Vectors written to {}", self.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_has_nineteen_values() {
        let range = ValueRange::default();
        assert_eq!(range.len(), 19);
        assert_eq!(range.values().count(), 19);
        assert_eq!(range.to_string(), "-9..=9");
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = ValueRange::new(1, 0);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.values().count(), 0);
    }

    #[test]
    fn test_confirmation_names_output_file() {
        let report = GenerationReport {
            output_path: DEFAULT_OUTPUT_FILE.to_string(),
            vectors_written: 130_321,
        };
        assert_eq!(report.confirmation(), "Vectors written to vectors.txt");
    }

    #[test]
    fn test_vector_len() {
        let vector = Vector::from(vec![-9, 0, 9, 1]);
        assert_eq!(vector.len(), 4);
        assert!(!vector.is_empty());
        assert!(Vector::from(vec![]).is_empty());
    }

    #[test]
    fn test_single_value_range() {
        let range = ValueRange::new(5, 5);
        assert!(!range.is_empty());
        assert_eq!(range.len(), 1);
    }
}
