use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// A configuration variable that failed to parse.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on each post-shutdown cleanup step, in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Key-value store file (default: `data/cachewise.json`).
    pub store_path: PathBuf,
    /// Performance monitor sampling interval in milliseconds (default: `3000`).
    pub monitor_interval_ms: u64,
    /// Simulated cache-analyzer run time in milliseconds (default: `2000`).
    pub analysis_delay_ms: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `STORE_PATH`           | `data/cachewise.json`      |
    /// | `MONITOR_INTERVAL_MS`  | `3000`                     |
    /// | `ANALYSIS_DELAY_MS`    | `2000`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let store_path = std::env::var("STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/cachewise.json"));

        let monitor_interval_ms: u64 = parse_var("MONITOR_INTERVAL_MS", "3000", "u64")?;
        if monitor_interval_ms == 0 {
            return Err(ConfigError {
                var: "MONITOR_INTERVAL_MS",
                expected: "positive u64",
                value: "0".into(),
            });
        }

        Ok(Self {
            host,
            port: parse_var("PORT", "3000", "u16")?,
            cors_origins,
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", "30", "u64")?,
            shutdown_timeout_secs: parse_var("SHUTDOWN_TIMEOUT_SECS", "30", "u64")?,
            store_path,
            monitor_interval_ms,
            analysis_delay_ms: parse_var("ANALYSIS_DELAY_MS", "2000", "u64")?,
        })
    }

    pub fn monitor_interval(&self) -> Duration {
        Duration::from_millis(self.monitor_interval_ms)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

fn parse_var<T: FromStr>(
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = std::env::var(var).unwrap_or_else(|_| default.into());
    value.trim().parse().map_err(|_| ConfigError {
        var,
        expected,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_falls_back_to_default() {
        let port: u16 = parse_var("CACHEWISE_TEST_UNSET_PORT", "3000", "u16").unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn parse_var_reports_bad_default_value() {
        let err = parse_var::<u16>("CACHEWISE_TEST_UNSET_PORT", "70000", "u16").unwrap_err();
        assert_eq!(err.var, "CACHEWISE_TEST_UNSET_PORT");
        assert_eq!(
            err.to_string(),
            "CACHEWISE_TEST_UNSET_PORT must be a valid u16, got '70000'"
        );
    }
}
