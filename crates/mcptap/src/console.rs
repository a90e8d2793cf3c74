//! Line-oriented output sink.
//!
//! The middleware emits `(level, text)` pairs; this module renders them.
//! When rich output is enabled the line is tinted by its level, otherwise
//! the exact same text is written plain.

use console::Style;
use std::env;
use std::io::{self, Write};
use std::sync::Mutex;

/// Severity attached to every emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// An inbound request about to be dispatched.
    Request,
    /// A successful response in the fast latency band.
    Ok,
    /// A successful response in the medium latency band.
    Warn,
    /// A slow response, or an error-flagged result.
    Alert,
}

/// Destination for pre-formatted traffic lines.
///
/// Implementations must keep writes line-atomic; concurrent interceptor
/// invocations share one sink.
pub trait Sink: Send + Sync {
    /// Write one line.
    fn write_line(&self, level: Level, text: &str);
}

/// Decide whether stderr traffic lines should be styled.
///
/// `MCPTAP_COLOR` forces styling on. Otherwise styling is off when an
/// agent client or CI spawned the process (`MCP_CLIENT`, `AGENT_MODE`,
/// `CI`) or when color is explicitly disabled (`NO_COLOR`, `MCPTAP_PLAIN`).
#[must_use]
pub fn styling_enabled() -> bool {
    if env::var_os("MCPTAP_COLOR").is_some() {
        return true;
    }
    ["MCP_CLIENT", "AGENT_MODE", "CI", "NO_COLOR", "MCPTAP_PLAIN"]
        .iter()
        .all(|var| env::var_os(var).is_none())
}

/// Sink that writes to stderr, or to an injected writer.
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    rich: bool,
}

impl ConsoleSink {
    /// Create a stderr sink, styled when the environment allows it.
    #[must_use]
    pub fn new() -> Self {
        Self::with_enabled(styling_enabled())
    }

    /// Create a stderr sink with explicit rich enable/disable.
    #[must_use]
    pub fn with_enabled(rich: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
            rich,
        }
    }

    /// Create a sink over a custom writer (for testing).
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(writer: W, rich: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            rich,
        }
    }

    /// Check if rich output is enabled.
    #[must_use]
    pub fn is_rich(&self) -> bool {
        self.rich
    }

    fn style_for(level: Level) -> Style {
        let style = Style::new().force_styling(true);
        match level {
            Level::Request => style.cyan(),
            Level::Ok => style.green(),
            Level::Warn => style.yellow(),
            Level::Alert => style.red(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, level: Level, text: &str) {
        let line = if self.rich {
            Self::style_for(level).apply_to(text).to_string()
        } else {
            text.to_owned()
        };
        // A failed log write must never affect the dispatch being logged.
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_plain_sink_writes_text_verbatim() {
        let buf = SharedBuf::default();
        let sink = ConsoleSink::with_writer(buf.clone(), false);
        sink.write_line(Level::Request, "→ tools/list");
        assert_eq!(buf.contents(), "→ tools/list\n");
    }

    #[test]
    fn test_rich_sink_emits_ansi() {
        let buf = SharedBuf::default();
        let sink = ConsoleSink::with_writer(buf.clone(), true);
        sink.write_line(Level::Alert, "✖ tools/call");
        let out = buf.contents();
        assert!(out.contains("✖ tools/call"));
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn test_is_rich_reflects_constructor() {
        assert!(ConsoleSink::with_enabled(true).is_rich());
        assert!(!ConsoleSink::with_enabled(false).is_rich());
    }

    #[test]
    fn test_lines_are_newline_terminated() {
        let buf = SharedBuf::default();
        let sink = ConsoleSink::with_writer(buf.clone(), false);
        sink.write_line(Level::Ok, "one");
        sink.write_line(Level::Warn, "two");
        assert_eq!(buf.contents(), "one\ntwo\n");
    }
}
