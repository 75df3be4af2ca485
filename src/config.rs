//! Check pipeline configuration.

use std::time::Duration;

/// Default base URI of the range lookup service.
pub const DEFAULT_API_BASE: &str = "https://api.pwnedpasswords.com/range/";

/// Default quiet period between an input change and the check it triggers.
pub const DEFAULT_CHECK_DELAY: Duration = Duration::from_millis(240);

/// Default occasion count from which leaks are reported as numerous.
pub const DEFAULT_CRITICAL_LEAK_THRESHOLD: u64 = 5;

/// Configuration for the check pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Base URI the hash prefix is appended to.
    pub api_base: String,
    /// Debounce delay applied to input changes.
    pub debounce: Duration,
    /// Occasion count from which leaks are reported as numerous.
    pub critical_leak_threshold: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            api_base: DEFAULT_API_BASE.to_string(),
            debounce: DEFAULT_CHECK_DELAY,
            critical_leak_threshold: DEFAULT_CRITICAL_LEAK_THRESHOLD,
        }
    }
}

impl CheckConfig {
    /// Builds a configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// Set `PWD_CHECK_API_BASE` to point checks at another range lookup
    /// service (e.g. a local proxy). All other settings keep their defaults.
    pub fn from_env() -> Self {
        let mut config = CheckConfig::default();
        if let Ok(api_base) = std::env::var("PWD_CHECK_API_BASE") {
            config.api_base = api_base;
        }
        config
    }
}
