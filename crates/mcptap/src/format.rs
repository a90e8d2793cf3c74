//! Pure formatting helpers for traffic lines.

use serde::Serialize;
use std::fmt;
use time::{OffsetDateTime, format_description};

use crate::console::Level;

/// Default maximum length for truncated fragments.
pub const DEFAULT_TRUNCATE_AT: usize = 60;

const ELLIPSIS: &str = "...";

/// Truncate a string with a trailing ellipsis.
///
/// Strings at or under `max_len` chars pass through unchanged; longer
/// strings are cut so the result is exactly `max_len` chars including the
/// ellipsis. Char-aware, so multi-byte input never splits a codepoint.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_owned();
    }
    if max_len <= ELLIPSIS.len() {
        return ELLIPSIS.chars().take(max_len).collect();
    }
    let mut out: String = s.chars().take(max_len - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Latency classification for a completed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    /// Under 100ms.
    Fast,
    /// 100ms to 500ms.
    Medium,
    /// 500ms and above.
    Slow,
}

impl Latency {
    /// Classify elapsed wall-clock milliseconds.
    #[must_use]
    pub fn classify(ms: f64) -> Self {
        if ms < 100.0 {
            Self::Fast
        } else if ms < 500.0 {
            Self::Medium
        } else {
            Self::Slow
        }
    }

    /// The display level for a successful response at this latency.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Fast => Level::Ok,
            Self::Medium => Level::Warn,
            Self::Slow => Level::Alert,
        }
    }
}

/// Render elapsed milliseconds for display, e.g. `42ms`.
#[must_use]
pub fn format_latency(ms: f64) -> String {
    format!("{ms:.0}ms")
}

/// Current wall-clock time as `HH:MM:SS`.
///
/// Uses the local offset when available, UTC otherwise (the local offset
/// can be unavailable in multi-threaded processes on some platforms).
#[must_use]
pub fn timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    // Format: HH:MM:SS
    if let Ok(fmt) = format_description::parse("[hour]:[minute]:[second]") {
        if let Ok(ts) = now.format(&fmt) {
            return ts;
        }
    }
    String::new()
}

/// Serialize a value to JSON, returning `None` instead of an error.
///
/// A value JSON cannot express falls back to its `Debug` form rendered as
/// a quoted string, so the display fragment degrades rather than
/// disappears. `None` is reserved for input even the fallback cannot
/// render; callers omit the fragment in that case.
#[must_use]
pub fn safe_json<T: Serialize + fmt::Debug>(value: &T) -> Option<String> {
    serde_json::to_string(value)
        .ok()
        .or_else(|| serde_json::to_string(&format!("{value:?}")).ok())
}
