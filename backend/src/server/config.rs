//! HTTP server configuration and wiring from settings.

use std::net::SocketAddr;
use std::sync::Arc;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use employee_directory::domain::EmployeeDirectoryService;
use employee_directory::domain::ports::EmployeeDirectory;
use employee_directory::outbound::employee_api::{
    EmployeeApiHttpSource, EmployeeApiSourceBuildError,
};
use employee_directory::settings::{DirectorySettings, SettingsError};
use tracing::info;

/// Startup failure while turning settings into a server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to build employee api client: {0}")]
    Source(#[from] EmployeeApiSourceBuildError),
}

/// Everything `create_server` needs: the directory port and the bind address.
pub struct ServerConfig {
    pub(crate) directory: Arc<dyn EmployeeDirectory>,
    pub(crate) bind_addr: SocketAddr,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration around an existing directory.
    #[must_use]
    pub fn new(directory: Arc<dyn EmployeeDirectory>, bind_addr: SocketAddr) -> Self {
        Self {
            directory,
            bind_addr,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Build the upstream client and directory service described by
    /// `settings`. The client is created once and shared by every worker.
    ///
    /// # Errors
    ///
    /// Returns [`ServerConfigError`] when a setting is invalid or the HTTP
    /// client cannot be built.
    pub fn from_settings(settings: &DirectorySettings) -> Result<Self, ServerConfigError> {
        let base_url = settings.upstream_base_url()?;
        let bind_addr = settings.bind_addr()?;
        let timeout = settings.upstream_timeout();
        info!(upstream = %base_url, timeout_secs = timeout.map(|t| t.as_secs()), "configuring employee api client");

        let source = EmployeeApiHttpSource::new(base_url, timeout)?;
        let directory = EmployeeDirectoryService::new(Arc::new(source));
        Ok(Self::new(Arc::new(directory), bind_addr))
    }

    /// Address the listener binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_produce_a_configured_bind_address() {
        let settings = DirectorySettings {
            upstream_base_url: Some("http://127.0.0.1:9000/api/v1".to_owned()),
            bind_host: Some("127.0.0.1".to_owned()),
            bind_port: 3000,
            ..DirectorySettings::default()
        };

        let config = ServerConfig::from_settings(&settings).expect("valid settings");
        assert_eq!(
            config.bind_addr(),
            "127.0.0.1:3000".parse::<SocketAddr>().expect("literal addr")
        );
    }

    #[test]
    fn invalid_settings_are_reported() {
        let settings = DirectorySettings {
            upstream_base_url: Some("ftp://upstream.test/api".to_owned()),
            ..DirectorySettings::default()
        };

        assert!(matches!(
            ServerConfig::from_settings(&settings),
            Err(ServerConfigError::Settings(SettingsError::UnsupportedBaseUrl { .. }))
        ));
    }
}
