//! HTTP listener settings

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use super::error::ValidationError;

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where and how the API listens
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind; parsed when the configuration loads
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// `tracing` filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Deadline for a whole request, including the assistant's reply delay
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Browser origins allowed to call the API (comma-separated)
    #[serde(default)]
    pub cors_origins: Option<String>,
}

/// Deployment flavour; only decides defaults such as CORS and log format.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Cross-origin policy derived from the configured origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin; local frontends on arbitrary ports.
    AnyOrigin,
    /// Exactly these origins.
    Origins(Vec<String>),
    /// No cross-origin access.
    SameOriginOnly,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Configured origins win; otherwise development is open and production closed.
    pub fn cors_policy(&self) -> CorsPolicy {
        let origins: Vec<String> = self
            .cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        match (origins.is_empty(), self.environment) {
            (false, _) => CorsPolicy::Origins(origins),
            (true, Environment::Development) => CorsPolicy::AnyOrigin,
            (true, Environment::Production) => CorsPolicy::SameOriginOnly,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout_secs(),
            cors_origins: None,
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,hcp_assistant=debug".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_8080() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn host_is_parsed_on_deserialization() {
        let config: ServerConfig = serde_json::from_str(r#"{ "host": "127.0.0.1" }"#).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");

        let bad = serde_json::from_str::<ServerConfig>(r#"{ "host": "not a host" }"#);
        assert!(bad.is_err());
    }

    #[test]
    fn staging_is_not_an_environment() {
        let result = serde_json::from_str::<ServerConfig>(r#"{ "environment": "staging" }"#);
        assert!(result.is_err());
    }

    mod cors {
        use super::*;

        fn with(environment: Environment, origins: Option<&str>) -> ServerConfig {
            ServerConfig {
                environment,
                cors_origins: origins.map(str::to_string),
                ..Default::default()
            }
        }

        #[test]
        fn configured_origins_are_trimmed_and_blank_entries_dropped() {
            let config = with(
                Environment::Production,
                Some("http://localhost:5173, http://localhost:3000,"),
            );
            assert_eq!(
                config.cors_policy(),
                CorsPolicy::Origins(vec![
                    "http://localhost:5173".to_string(),
                    "http://localhost:3000".to_string(),
                ])
            );
        }

        #[test]
        fn development_without_origins_is_open() {
            assert_eq!(
                with(Environment::Development, None).cors_policy(),
                CorsPolicy::AnyOrigin
            );
            assert_eq!(
                with(Environment::Development, Some(" , ")).cors_policy(),
                CorsPolicy::AnyOrigin
            );
        }

        #[test]
        fn production_without_origins_is_closed() {
            assert_eq!(
                with(Environment::Production, None).cors_policy(),
                CorsPolicy::SameOriginOnly
            );
        }
    }

    #[test]
    fn zero_port_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPort)));
    }

    #[test]
    fn timeout_must_be_within_bounds() {
        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
        }
    }
}
