//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines the response
//! literals, Cache-Control header values, logging defaults and default paths.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// Response Bodies
// =============================================================================

/// Banner returned by `GET /`
pub const HOME_BANNER: &str = "Java App is running successfully 🚀";

/// Liveness string returned by `GET /health`
pub const HEALTH_STATUS: &str = "Application is running";

/// Message returned by `GET /hello` when none is configured
pub const DEFAULT_HELLO_MESSAGE: &str = "Hello from service!";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Banner and hello message never change while the process runs, so upstream
// caches may hold them briefly. The health probe must always hit the process.

/// Banner and hello message freshness in seconds
pub const HTTP_CACHE_STATIC_TEXT_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_STATIC_TEXT: &str =
    formatcp!("public, max-age={}", HTTP_CACHE_STATIC_TEXT_MAX_AGE);

pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Server Lifecycle
// =============================================================================

/// Time allowed for in-flight requests to finish after a shutdown signal
pub const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default bind host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "launchpad=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Text served by the hello endpoint
    #[serde(default)]
    pub message: MessageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageConfig {
    #[serde(default = "MessageConfig::default_hello")]
    pub hello: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            hello: Self::default_hello(),
        }
    }
}

impl MessageConfig {
    fn default_hello() -> String {
        DEFAULT_HELLO_MESSAGE.to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load the file if present, otherwise fall back to built-in defaults.
    ///
    /// Returns the config together with whether a file was actually read.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<(Self, bool), ConfigError> {
        if path.as_ref().exists() {
            Ok((Self::load(path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.message.hello.trim().is_empty() {
            return Err(ConfigError::Validation(
                "message.hello must not be empty".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }

        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be non-zero".to_string(),
            ));
        }

        self.socket_addr().map(|_| ())
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http.host, self.http.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!("Invalid http.host or http.port: {}", e))
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.message.hello, DEFAULT_HELLO_MESSAGE);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn parses_all_sections() {
        let config = AppConfig::from_toml(
            r#"
            [http]
            host = "127.0.0.1"
            port = 3000

            [message]
            hello = "Hi there"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(config.message.hello, "Hi there");
        assert!(config.logging.is_json());
    }

    #[test]
    fn rejects_blank_hello_message() {
        let err = AppConfig::from_toml("[message]\nhello = \"   \"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }

    #[test]
    fn rejects_zero_port() {
        let err = AppConfig::from_toml("[http]\nport = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_unparseable_host() {
        let err = AppConfig::from_toml("[http]\nhost = \"not a host\"").unwrap_err();
        assert!(err.to_string().contains("http.host"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = AppConfig::from_toml("[http\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[message]\nhello = \"From a file\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.message.hello, "From a file");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_or_default_falls_back_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let (config, from_file) =
            AppConfig::load_or_default(dir.path().join("missing.toml")).unwrap();
        assert!(!from_file);
        assert_eq!(config.message.hello, DEFAULT_HELLO_MESSAGE);
    }

    #[test]
    fn cache_control_values() {
        assert_eq!(CACHE_CONTROL_STATIC_TEXT, "public, max-age=60");
        assert_eq!(CACHE_CONTROL_HEALTH, "no-store");
    }
}
