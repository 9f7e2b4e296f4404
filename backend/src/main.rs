//! Service entry-point: loads settings, wires the directory over the upstream
//! employee API, and serves the REST API.

mod server;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employee_directory::inbound::http::health::HealthState;
use employee_directory::settings::DirectorySettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DirectorySettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;
    let bind_addr = config.bind_addr();
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(make_metrics());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "employee directory listening");
    server.await
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Option<PrometheusMetrics> {
    match PrometheusMetricsBuilder::new("employee_directory")
        .endpoint("/metrics")
        .build()
    {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "failed to configure Prometheus metrics; continuing without them");
            None
        }
    }
}
