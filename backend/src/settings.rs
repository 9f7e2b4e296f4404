//! Service configuration loaded via OrthoConfig.
//!
//! Values merge from CLI flags, `EMPLOYEE_DIRECTORY_*` environment variables,
//! and configuration files. Every field is optional; accessors apply defaults
//! and validate.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::employee_api::DEFAULT_BASE_URL;

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 8080;

/// Invalid configuration detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The upstream base URL does not parse.
    #[error("invalid upstream base url {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    /// The upstream base URL cannot carry path segments.
    #[error("upstream base url {value:?} must be an absolute http(s) url")]
    UnsupportedBaseUrl { value: String },
    /// The bind host is not an IP address.
    #[error("invalid bind host {value:?}: {source}")]
    InvalidBindHost {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Configuration for the employee directory service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEE_DIRECTORY")]
pub struct DirectorySettings {
    /// Base URL of the upstream employee API.
    pub upstream_base_url: Option<String>,
    /// Per-request upstream timeout in seconds; unset or 0 keeps the
    /// transport default.
    pub upstream_timeout_seconds: Option<u64>,
    /// IP address to bind the HTTP listener to.
    pub bind_host: Option<String>,
    /// Port to bind the HTTP listener to.
    #[ortho_config(default = 8080)]
    pub bind_port: u16,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            upstream_base_url: None,
            upstream_timeout_seconds: None,
            bind_host: None,
            bind_port: DEFAULT_BIND_PORT,
        }
    }
}

impl DirectorySettings {
    /// Return the validated upstream base URL, falling back to the public API.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the URL does not parse or is not an
    /// absolute `http`/`https` URL.
    pub fn upstream_base_url(&self) -> Result<Url, SettingsError> {
        let value = self.upstream_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let url = Url::parse(value).map_err(|source| SettingsError::InvalidBaseUrl {
            value: value.to_owned(),
            source,
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(SettingsError::UnsupportedBaseUrl {
                value: value.to_owned(),
            });
        }
        Ok(url)
    }

    /// Return the configured upstream timeout, if any.
    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_seconds
            .filter(|seconds| *seconds > 0)
            .map(Duration::from_secs)
    }

    /// Return the socket address to bind; the host falls back to `0.0.0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST);
        let ip = host
            .parse::<IpAddr>()
            .map_err(|source| SettingsError::InvalidBindHost {
                value: host.to_owned(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.bind_port))
    }
}
