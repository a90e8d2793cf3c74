//! Traffic logging configuration.
//!
//! `TrafficConfig` is handed to the interceptor at construction; there is
//! no process-wide state.

use std::collections::HashSet;
use std::env;

use crate::format::DEFAULT_TRUNCATE_AT;
use mcptap_protocol::methods;

/// Configuration for the traffic interceptor.
#[derive(Debug, Clone)]
pub struct TrafficConfig {
    /// Whether traffic logging is active at all.
    pub enabled: bool,
    /// Methods excluded from logging (still dispatched normally).
    pub noise_methods: HashSet<String>,
    /// Maximum length of rendered params/result fragments.
    pub truncate_at: usize,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            noise_methods: HashSet::from([methods::NOTIFICATIONS_INITIALIZED.to_owned()]),
            truncate_at: DEFAULT_TRUNCATE_AT,
        }
    }
}

impl TrafficConfig {
    /// Create config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from environment variables.
    ///
    /// `ENV=production` disables traffic logging; any other value (or an
    /// unset variable) leaves it enabled.
    #[must_use]
    pub fn from_env() -> Self {
        let enabled = env::var("ENV").map(|v| v != "production").unwrap_or(true);
        Self::default().with_enabled(enabled)
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Enable or disable traffic logging.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Add a method to the noise set.
    #[must_use]
    pub fn with_noise_method(mut self, method: impl Into<String>) -> Self {
        self.noise_methods.insert(method.into());
        self
    }

    /// Set the truncation length for rendered fragments.
    #[must_use]
    pub fn with_truncate_at(mut self, len: usize) -> Self {
        self.truncate_at = len;
        self
    }

    /// Check whether a method is excluded from logging.
    #[must_use]
    pub fn is_noise(&self, method: &str) -> bool {
        self.noise_methods.contains(method)
    }
}
