//! Logging configuration shared by udpx processes.

/// Environment variable that turns on debug logs when set to exactly `1`.
pub const DEBUG_LOGS_ENV: &str = "NEXT_DEBUG_LOGS";

/// Logging settings, read once at startup and passed to whoever installs
/// the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogConfig {
    /// Emit debug-level messages.
    pub debug_logs: bool,
}

impl LogConfig {
    /// Creates a config with debug logs enabled.
    #[must_use]
    pub const fn debug() -> Self {
        Self { debug_logs: true }
    }

    /// Reads the config from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the config through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            debug_logs: lookup(DEBUG_LOGS_ENV).as_deref() == Some("1"),
        }
    }

    /// Returns the default log filter directive for this config.
    #[must_use]
    pub const fn default_directive(&self) -> &'static str {
        if self.debug_logs {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| {
            assert_eq!(key, DEBUG_LOGS_ENV);
            value.map(str::to_owned)
        }
    }

    #[test]
    fn default_is_quiet() {
        let config = LogConfig::default();
        assert!(!config.debug_logs);
        assert_eq!(config.default_directive(), "info");
    }

    #[test]
    fn enabled_only_by_exact_one() {
        assert!(LogConfig::from_lookup(lookup_with(Some("1"))).debug_logs);
        assert!(!LogConfig::from_lookup(lookup_with(Some("true"))).debug_logs);
        assert!(!LogConfig::from_lookup(lookup_with(Some("0"))).debug_logs);
        assert!(!LogConfig::from_lookup(lookup_with(Some(""))).debug_logs);
        assert!(!LogConfig::from_lookup(lookup_with(None)).debug_logs);
    }

    #[test]
    fn debug_directive() {
        assert_eq!(LogConfig::debug().default_directive(), "debug");
    }

    #[test]
    fn const_constructible() {
        const CONFIG: LogConfig = LogConfig::debug();
        assert!(CONFIG.debug_logs);
    }
}
