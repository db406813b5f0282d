//! Configuration schema and environment resolution.
//!
//! All environment variables are read exactly once, at startup, producing
//! an immutable [`AppConfig`] that is shared by reference for the process
//! lifetime. Handlers and middleware never touch the environment directly.

use thiserror::Error;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default deployment environment name.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Default application version when `APP_VERSION` is unset.
pub const DEFAULT_VERSION: &str = "0.0.1";

/// Default CORS origin (allow all).
pub const DEFAULT_CORS_ORIGIN: &str = "*";

/// Environment name that suppresses request logging.
const TEST_ENVIRONMENT: &str = "test";

/// Error raised when environment configuration cannot be resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid TCP port number.
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Immutable application configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host (`HOST`).
    pub host: String,

    /// Listen port (`PORT`).
    pub port: u16,

    /// Deployment environment name (`APP_ENV`).
    pub environment: String,

    /// Application version string (`APP_VERSION`).
    pub version: String,

    /// Allowed CORS origin (`CORS_ORIGIN`).
    pub cors_origin: String,
}

impl AppConfig {
    /// Resolve configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through a lookup function.
    ///
    /// Separated from [`from_env`](Self::from_env) so tests can supply
    /// values without mutating process-wide environment state.
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            environment: lookup("APP_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            version: lookup("APP_VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        })
    }

    /// Address string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the request-logging middleware should emit events.
    ///
    /// Suppressed under the test environment to keep test output clean.
    /// This is a configuration toggle, not conditional business behavior.
    pub fn request_logging(&self) -> bool {
        self.environment != TEST_ENVIRONMENT
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            version: DEFAULT_VERSION.to_string(),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::resolve(|_| None).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "development");
        assert_eq!(config.version, "0.0.1");
        assert_eq!(config.cors_origin, "*");
        assert!(config.request_logging());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::resolve(|key| match key {
            "PORT" => Some("9090".to_string()),
            "HOST" => Some("0.0.0.0".to_string()),
            "APP_ENV" => Some("production".to_string()),
            "APP_VERSION" => Some("1.2.3".to_string()),
            "CORS_ORIGIN" => Some("https://example.com".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
        assert_eq!(config.version, "1.2.3");
        assert_eq!(config.cors_origin, "https://example.com");
    }

    #[test]
    fn invalid_port_is_a_startup_error() {
        let result = AppConfig::resolve(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
    }

    #[test]
    fn test_environment_disables_request_logging() {
        let config = AppConfig::resolve(|key| match key {
            "APP_ENV" => Some("test".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(!config.request_logging());
    }
}
