//! Runtime configuration for the portal.

use std::path::PathBuf;
use std::time::Duration;

use crate::state::{FontSize, DEFAULT_TOAST_DURATION};

/// Simulated network delay for every screen load.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(1000);
/// Event loop tick, roughly 60 frames per second.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(16);

pub const ENV_LOAD_DELAY_MS: &str = "PORTAL_LOAD_DELAY_MS";
pub const ENV_TOAST_MS: &str = "PORTAL_TOAST_MS";
pub const ENV_LOG_FILE: &str = "PORTAL_LOG_FILE";

/// Configuration for a portal session.
///
/// Built from defaults, then environment, then command-line flags:
///
/// ```ignore
/// use portal::startup::PortalConfig;
///
/// let config = PortalConfig::from_env()
///     .with_dark_mode(true)
///     .with_load_delay(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub load_delay: Duration,
    pub toast_duration: Duration,
    pub tick_rate: Duration,
    pub initial_dark_mode: bool,
    pub initial_font_size: FontSize,
    /// Log file; `None` means `<temp dir>/portal.log`
    pub log_file: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            load_delay: DEFAULT_LOAD_DELAY,
            toast_duration: DEFAULT_TOAST_DURATION,
            tick_rate: DEFAULT_TICK_RATE,
            initial_dark_mode: false,
            initial_font_size: FontSize::Base,
            log_file: None,
        }
    }
}

impl PortalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_dark_mode(mut self, dark: bool) -> Self {
        self.initial_dark_mode = dark;
        self
    }

    pub fn with_font_size(mut self, size: FontSize) -> Self {
        self.initial_font_size = size;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Resolved log file path.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("portal.log"))
    }

    /// Defaults overridden by `PORTAL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injected variable lookup.
    /// Unparseable values are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(ms) = parse_millis(&lookup, ENV_LOAD_DELAY_MS) {
            config.load_delay = ms;
        }
        if let Some(ms) = parse_millis(&lookup, ENV_TOAST_MS) {
            config.toast_duration = ms;
        }
        if let Some(path) = lookup(ENV_LOG_FILE).filter(|p| !p.is_empty()) {
            config.log_file = Some(PathBuf::from(path));
        }
        config
    }
}

fn parse_millis(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<Duration> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(e) => {
            tracing::warn!("ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.load_delay, Duration::from_millis(1000));
        assert_eq!(config.toast_duration, Duration::from_millis(3000));
        assert_eq!(config.tick_rate, Duration::from_millis(16));
        assert!(!config.initial_dark_mode);
        assert_eq!(config.initial_font_size, FontSize::Base);
        assert!(config.log_path().ends_with("portal.log"));
    }

    #[test]
    fn test_builder() {
        let config = PortalConfig::new()
            .with_load_delay(Duration::ZERO)
            .with_dark_mode(true)
            .with_font_size(FontSize::Large)
            .with_log_file("/tmp/x.log");
        assert_eq!(config.load_delay, Duration::ZERO);
        assert!(config.initial_dark_mode);
        assert_eq!(config.initial_font_size, FontSize::Large);
        assert_eq!(config.log_path(), PathBuf::from("/tmp/x.log"));
    }

    #[test]
    fn test_env_overrides() {
        let config = PortalConfig::from_lookup(lookup_from(&[
            (ENV_LOAD_DELAY_MS, "250"),
            (ENV_TOAST_MS, " 500 "),
            (ENV_LOG_FILE, "/var/tmp/p.log"),
        ]));
        assert_eq!(config.load_delay, Duration::from_millis(250));
        assert_eq!(config.toast_duration, Duration::from_millis(500));
        assert_eq!(config.log_file, Some(PathBuf::from("/var/tmp/p.log")));
    }

    #[test]
    fn test_bad_env_values_ignored() {
        let config = PortalConfig::from_lookup(lookup_from(&[
            (ENV_LOAD_DELAY_MS, "soon"),
            (ENV_LOG_FILE, ""),
        ]));
        assert_eq!(config.load_delay, DEFAULT_LOAD_DELAY);
        assert_eq!(config.log_file, None);
    }
}
