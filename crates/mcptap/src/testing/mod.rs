//! Test utilities for asserting on traffic output.
//!
//! [`TestSink`] captures `(level, text)` pairs before any rendering.
//! [`CapturedConsole`] captures the rendered output of a real
//! [`ConsoleSink`](crate::console::ConsoleSink) with ANSI escapes stripped
//! on read, for asserting that styling degrades cleanly.

mod capture;
mod test_sink;

pub use capture::CapturedConsole;
pub use test_sink::TestSink;
