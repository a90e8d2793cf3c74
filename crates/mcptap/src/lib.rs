//! Request/response traffic logging middleware for MCP servers.
//!
//! mcptap sits between the transport and the dispatcher: wrap each
//! dispatch in [`TrafficLogger::intercept`] and every non-noise message
//! produces a timestamped request line before the call and a latency-coded
//! response line after it, written atomically to stderr (or any injected
//! [`Sink`]).
//!
//! ```ignore
//! use mcptap::TrafficLogger;
//! use mcptap::protocol::Message;
//!
//! let tap = TrafficLogger::from_env();
//! let message = Message::new("tools/call", params);
//! let result = tap.intercept(&message, |msg| dispatcher.dispatch(msg))?;
//! ```
//!
//! Logging is best-effort: formatting failures degrade the line and
//! downstream errors propagate untouched.

#![forbid(unsafe_code)]

pub mod config;
pub mod console;
pub mod format;
pub mod middleware;
pub mod testing;

pub use config::TrafficConfig;
pub use console::{ConsoleSink, Level, Sink, styling_enabled};
pub use format::{DEFAULT_TRUNCATE_AT, Latency, format_latency, safe_json, timestamp, truncate};
pub use middleware::TrafficLogger;

pub use mcptap_protocol as protocol;
