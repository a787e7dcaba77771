//! Planner configuration loaded from environment variables.

/// Planner configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `PLANNER_CONTAINER_CAPACITY`: capacity in cm3 when the manifest has none (default: `100000`)
/// - `PLANNER_PARALLEL`: shard packing by destination (default: `false`)
/// - `PLANNER_LOG_FORMAT`: `"text"` or `"json"` (default: `"text"`)
/// - `PLANNER_METRICS`: print Prometheus metrics to stderr on exit (default: `false`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub container_capacity: u64,
    pub parallel: bool,
    pub log_format: LogFormat,
    pub metrics: bool,
    pub log_level: String,
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            container_capacity: lookup("PLANNER_CONTAINER_CAPACITY")
                .and_then(|c| c.parse().ok())
                .unwrap_or(defaults.container_capacity),
            parallel: lookup("PLANNER_PARALLEL")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.parallel),
            log_format: match lookup("PLANNER_LOG_FORMAT")
                .map(|v| v.trim().to_ascii_lowercase())
                .as_deref()
            {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
            metrics: lookup("PLANNER_METRICS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.metrics),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_capacity: 100_000,
            parallel: false,
            log_format: LogFormat::Text,
            metrics: false,
            log_level: "info".to_string(),
        }
    }
}
