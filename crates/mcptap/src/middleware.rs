//! Request/response traffic interception.
//!
//! [`TrafficLogger`] wraps every dispatched message: it decides whether to
//! log, times the downstream call, and writes one request line and one
//! response line to the sink. Formatting failures degrade the line, never
//! the call; downstream errors pass through untouched.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::config::TrafficConfig;
use crate::console::{ConsoleSink, Level, Sink};
use crate::format::{Latency, format_latency, safe_json, timestamp, truncate};
use mcptap_protocol::{CallResult, Message, methods};

const LOG_TARGET: &str = "mcptap::traffic";

/// Colorized dev logging middleware for MCP requests and responses.
///
/// Holds no mutable state; a single instance is shared across concurrent
/// dispatches (`&self`, sink writes are line-atomic).
pub struct TrafficLogger {
    config: TrafficConfig,
    sink: Arc<dyn Sink>,
}

impl TrafficLogger {
    /// Create a logger with the given config and sink.
    #[must_use]
    pub fn new(config: TrafficConfig, sink: Arc<dyn Sink>) -> Self {
        Self { config, sink }
    }

    /// Create a logger the way a server binary would: stderr sink with
    /// auto-detected styling, enablement derived from `ENV`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(TrafficConfig::from_env(), Arc::new(ConsoleSink::new()))
    }

    /// Wrap one message dispatch.
    ///
    /// Calls `next` exactly once. Disabled and noise-method messages bypass
    /// logging entirely; everything else produces a request line before the
    /// call and a response line after it. An `Err` from `next` propagates
    /// unchanged and suppresses the response line.
    pub fn intercept<F, E>(&self, message: &Message, next: F) -> Result<CallResult, E>
    where
        F: FnOnce(&Message) -> Result<CallResult, E>,
    {
        if !self.config.enabled {
            log::trace!(target: LOG_TARGET, "logging disabled, dispatching {}", message.method);
            return next(message);
        }
        if self.config.is_noise(&message.method) {
            log::trace!(target: LOG_TARGET, "skipping noise method {}", message.method);
            return next(message);
        }

        let (level, line) = self.request_line(message);
        self.sink.write_line(level, &line);

        let start = Instant::now();
        let result = next(message)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let (level, line) = self.response_line(message, &result, elapsed_ms);
        self.sink.write_line(level, &line);

        Ok(result)
    }

    fn request_line(&self, message: &Message) -> (Level, String) {
        let ts = timestamp();
        let line = match &message.params {
            Some(params) if message.is_tool_call() => {
                let name = params.get("name").and_then(Value::as_str).unwrap_or("unknown");
                match self.tool_args_fragment(params) {
                    Some(args) => format!("[{ts}] → {} {name} {args}", methods::TOOLS_CALL),
                    None => format!("[{ts}] → {} {name}", methods::TOOLS_CALL),
                }
            }
            Some(params) => match safe_json(params) {
                Some(json) => format!(
                    "[{ts}] → {} {}",
                    message.method,
                    truncate(&json, self.config.truncate_at)
                ),
                None => format!("[{ts}] → {}", message.method),
            },
            None => format!("[{ts}] → {}", message.method),
        };
        (Level::Request, line)
    }

    /// Arguments fragment of a tool-call request line. Absent, null, and
    /// empty-object arguments are omitted entirely, as is anything JSON
    /// rendering cannot handle.
    fn tool_args_fragment(&self, params: &Value) -> Option<String> {
        let args = params.get("arguments")?;
        let empty = args.is_null() || args.as_object().is_some_and(serde_json::Map::is_empty);
        if empty {
            return None;
        }
        safe_json(args).map(|json| truncate(&json, self.config.truncate_at))
    }

    fn response_line(&self, message: &Message, result: &CallResult, elapsed_ms: f64) -> (Level, String) {
        let ts = timestamp();
        let latency = format_latency(elapsed_ms);
        match result {
            CallResult::Failure(info) => {
                let detail = truncate(&info.to_string(), self.config.truncate_at);
                (
                    Level::Alert,
                    format!("[{ts}] ✖ {} {detail} ({latency})", message.method),
                )
            }
            CallResult::Success(payload) => {
                let level = Latency::classify(elapsed_ms).level();
                let line = if message.is_tool_call() {
                    match payload.first_text() {
                        Some(text) => {
                            format!("[{ts}] ← {} ({latency})", truncate(text, self.config.truncate_at))
                        }
                        None => format!("[{ts}] ✓ {} ({latency})", methods::TOOLS_CALL),
                    }
                } else {
                    format!("[{ts}] ✓ {} ({latency})", message.method)
                };
                (level, line)
            }
        }
    }
}
