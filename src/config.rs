//! Configuration loading and constants.
//!
//! Resolves the listening port from the `PORT` environment variable and the
//! logging setup from `RUST_LOG` / `LOG_FORMAT`. Also holds the fixed literals
//! that make up the service's JSON payloads. `AppConfig` is the root
//! configuration struct.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use const_format::formatcp;

// =============================================================================
// Service Identity
// =============================================================================

/// Service name reported by the root route
pub const SERVICE_NAME: &str = "HyperServe";

/// CIE set this deployment belongs to
pub const CIE_SET: &str = "207";

/// Version string reported by the root route
pub const SERVICE_VERSION: &str = "3.0";

/// Status reported by the root route
pub const STATUS_ONLINE: &str = "online";

/// Status reported by the liveness route
pub const STATUS_HEALTHY: &str = "healthy";

/// Service identifier reported by the liveness route
pub const HEALTH_SERVICE_ID: &str = "hyperserve-svc:3";

/// Human-readable status line reported by the root route
pub const ONLINE_MESSAGE: &str = formatcp!("{} service online for CIE set {}", SERVICE_NAME, CIE_SET);

// =============================================================================
// HTTP
// =============================================================================

/// Environment variable holding the listening port
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is unset or unparsable
pub const DEFAULT_PORT: u16 = 12208;

/// Bind on all interfaces
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Liveness responses must never be served from a cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Maximum time to wait for in-flight requests on shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Logging
// =============================================================================

/// Environment variable selecting the log format
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Environment variable holding the log filter directives
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "hyperserve=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Text;

/// Root configuration, resolved from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Raw `PORT` value that could not be parsed, kept so it can be reported
    /// once logging is up
    pub rejected_port: Option<String>,
}

impl HttpServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parses a format name; unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT,
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Resolution never fails: every setting has a default, and invalid
    /// values fall back to it.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (port, rejected_port) = match lookup(PORT_ENV) {
            None => (DEFAULT_PORT, None),
            Some(raw) if raw.trim().is_empty() => (DEFAULT_PORT, None),
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => (port, None),
                Err(_) => (DEFAULT_PORT, Some(raw)),
            },
        };

        let format = lookup(LOG_FORMAT_ENV)
            .and_then(|f| LogFormat::parse(&f))
            .unwrap_or(DEFAULT_LOG_FORMAT);

        let filter = lookup(LOG_FILTER_ENV)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            http: HttpServerConfig {
                host: DEFAULT_HOST,
                port,
                rejected_port,
            },
            logging: LoggingConfig { format, filter },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn absent_port_uses_default() {
        let config = config_with(&[]);
        assert_eq!(config.http.port, 12208);
        assert_eq!(config.http.rejected_port, None);
        assert_eq!(config.http.addr().to_string(), "0.0.0.0:12208");
    }

    #[test]
    fn port_from_environment() {
        let config = config_with(&[("PORT", "8080")]);
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn port_is_trimmed() {
        assert_eq!(config_with(&[("PORT", " 9000\n")]).http.port, 9000);
    }

    #[test]
    fn unparsable_port_falls_back() {
        for raw in ["abc", "-1", "65536", "80.5", "0x50"] {
            let config = config_with(&[("PORT", raw)]);
            assert_eq!(config.http.port, DEFAULT_PORT, "PORT={raw}");
            assert_eq!(config.http.rejected_port.as_deref(), Some(raw));
        }
    }

    #[test]
    fn empty_port_falls_back_silently() {
        let config = config_with(&[("PORT", "  ")]);
        assert_eq!(config.http.port, DEFAULT_PORT);
        assert_eq!(config.http.rejected_port, None);
    }

    #[test]
    fn logging_defaults() {
        assert_eq!(config_with(&[]).logging, LoggingConfig::default());
    }

    #[test]
    fn logging_overrides() {
        let config = config_with(&[("LOG_FORMAT", "JSON"), ("RUST_LOG", "hyperserve=debug")]);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.filter, "hyperserve=debug");
    }

    #[test]
    fn unknown_log_format_is_text() {
        assert_eq!(config_with(&[("LOG_FORMAT", "xml")]).logging.format, LogFormat::Text);
    }

    #[test]
    fn online_message_literal() {
        assert_eq!(ONLINE_MESSAGE, "HyperServe service online for CIE set 207");
    }
}
