//! Sink that captures lines for assertion instead of writing to stderr.

use crate::console::{Level, Sink};
use std::sync::{Arc, Mutex};

/// A [`Sink`] that records every line it receives.
///
/// `Clone` shares the underlying buffer, so a test can keep one handle and
/// hand another to the logger under test.
#[derive(Clone, Default)]
pub struct TestSink {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl TestSink {
    /// Create an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines with their levels.
    #[must_use]
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Captured line texts without levels.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .map(|(_, text)| text)
            .collect()
    }

    /// Captured output as a single string.
    #[must_use]
    pub fn output_string(&self) -> String {
        self.texts().join("\n")
    }

    /// Check if output contains a string (case-insensitive).
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        let output = self.output_string().to_lowercase();
        output.contains(&needle.to_lowercase())
    }

    /// Check if output contains all of the given strings.
    #[must_use]
    pub fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.contains(n))
    }

    /// Check if output matches a regex pattern.
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match regex::Regex::new(pattern) {
            Ok(re) => re.is_match(&self.output_string()),
            Err(_) => false,
        }
    }

    /// Assert that output contains a string.
    ///
    /// # Panics
    ///
    /// Panics if the output does not contain the needle string.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "Output did not contain '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert that output does NOT contain a string.
    ///
    /// # Panics
    ///
    /// Panics if the output contains the needle string.
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "Output unexpectedly contained '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert output has a specific number of lines.
    ///
    /// # Panics
    ///
    /// Panics if the line count doesn't match expected.
    pub fn assert_line_count(&self, expected: usize) {
        let actual = self.lines().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} lines but got {}. Actual output:\n{}",
            expected,
            actual,
            self.output_string()
        );
    }

    /// Check whether nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    /// Clear the buffer.
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl Sink for TestSink {
    fn write_line(&self, level: Level, text: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, text.to_owned()));
        }
    }
}

impl std::fmt::Debug for TestSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSink")
            .field("line_count", &self.lines().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_and_levels() {
        let sink = TestSink::new();
        sink.write_line(Level::Request, "→ tools/list");
        sink.write_line(Level::Ok, "✓ tools/list (2ms)");

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Level::Request);
        assert_eq!(lines[1].0, Level::Ok);
    }

    #[test]
    fn test_contains_case_insensitive() {
        let sink = TestSink::new();
        sink.write_line(Level::Ok, "Hello World");
        assert!(sink.contains("hello"));
        assert!(sink.contains("WORLD"));
    }

    #[test]
    fn test_contains_all() {
        let sink = TestSink::new();
        sink.write_line(Level::Ok, "The quick brown fox");
        assert!(sink.contains_all(&["quick", "brown", "fox"]));
        assert!(!sink.contains_all(&["quick", "lazy"]));
    }

    #[test]
    fn test_matches_regex() {
        let sink = TestSink::new();
        sink.write_line(Level::Ok, "✓ tools/list (42ms)");
        assert!(sink.matches(r"\(\d+ms\)"));
        assert!(!sink.matches(r"\(\d+s\)"));
    }

    #[test]
    fn test_clone_shares_buffer() {
        let sink = TestSink::new();
        let handle = sink.clone();
        sink.write_line(Level::Alert, "shared");
        assert!(handle.contains("shared"));
    }

    #[test]
    fn test_clear() {
        let sink = TestSink::new();
        sink.write_line(Level::Ok, "something");
        assert!(!sink.is_empty());
        sink.clear();
        assert!(sink.is_empty());
    }
}
