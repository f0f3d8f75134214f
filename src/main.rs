//! Dashboard gateway binary.
//!
//! Bootstraps configuration, logging, and the metrics exporter, then runs
//! the HTTP server until a shutdown signal arrives.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use dashboard_gateway::config::loader;
use dashboard_gateway::http::HttpServer;
use dashboard_gateway::lifecycle::Shutdown;
use dashboard_gateway::observability;

#[derive(Parser, Debug)]
#[command(name = "dashboard-gateway", version, about = "Dashboard aggregation gateway")]
struct Args {
    /// Path to the TOML configuration file. Defaults plus environment
    /// overrides (TODO_URL, SERVER_PORT, LOG_LEVEL) are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => loader::from_env()?,
    };

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config);
    server.run(listener, receiver).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
