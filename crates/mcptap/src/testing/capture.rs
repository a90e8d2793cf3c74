//! Capturing wrapper around a real `ConsoleSink`.

use crate::console::ConsoleSink;
use std::io::Write;
use std::sync::{Arc, Mutex};
use strip_ansi_escapes::strip;

/// A [`ConsoleSink`] writing into an in-memory buffer.
///
/// `output()` strips ANSI escapes on read, so assertions on rich output see
/// the same text a plain sink would have produced.
pub struct CapturedConsole {
    sink: Arc<ConsoleSink>,
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedConsole {
    /// Create a capturing sink in plain mode.
    #[must_use]
    pub fn new() -> Self {
        Self::new_inner(false)
    }

    /// Create a capturing sink in rich mode (ANSI escapes emitted).
    #[must_use]
    pub fn new_rich() -> Self {
        Self::new_inner(true)
    }

    fn new_inner(rich: bool) -> Self {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = BufferWriter(buffer.clone());
        Self {
            sink: Arc::new(ConsoleSink::with_writer(writer, rich)),
            buffer,
        }
    }

    /// The sink to hand to the logger under test.
    #[must_use]
    pub fn sink(&self) -> Arc<ConsoleSink> {
        self.sink.clone()
    }

    /// Captured lines with ANSI escapes stripped.
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        let bytes = self.buffer.lock().map(|b| b.clone()).unwrap_or_default();
        let stripped = strip(&bytes);
        String::from_utf8_lossy(&stripped)
            .lines()
            .map(String::from)
            .collect()
    }

    /// Captured lines with ANSI escapes preserved.
    #[must_use]
    pub fn raw_output(&self) -> Vec<String> {
        let bytes = self.buffer.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(String::from)
            .collect()
    }

    /// Captured output as a single ANSI-stripped string.
    #[must_use]
    pub fn output_string(&self) -> String {
        self.output().join("\n")
    }
}

impl Default for CapturedConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CapturedConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapturedConsole")
            .field("is_rich", &self.sink.is_rich())
            .field("line_count", &self.output().len())
            .finish()
    }
}

/// Writer that captures to a shared buffer.
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut buffer) = self.0.lock() {
            buffer.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Level, Sink};

    #[test]
    fn test_plain_capture() {
        let captured = CapturedConsole::new();
        captured.sink().write_line(Level::Ok, "✓ tools/list (2ms)");
        assert_eq!(captured.output(), vec!["✓ tools/list (2ms)"]);
    }

    #[test]
    fn test_rich_capture_strips_to_same_text() {
        let plain = CapturedConsole::new();
        let rich = CapturedConsole::new_rich();
        for captured in [&plain, &rich] {
            captured.sink().write_line(Level::Alert, "✖ tools/call Error 1: x (900ms)");
        }
        assert_eq!(plain.output(), rich.output());
        assert_ne!(plain.raw_output(), rich.raw_output());
    }

    #[test]
    fn test_raw_output_preserves_ansi() {
        let captured = CapturedConsole::new_rich();
        captured.sink().write_line(Level::Warn, "slow-ish");
        let raw = captured.raw_output().join("");
        assert!(raw.contains('\u{1b}'));
    }
}
