//! Static host for the Vibed Traveller SPA bundle.

mod config;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let loaded = ServerConfig::from_env();
    let directive = loaded.as_ref().map_or(config::DEFAULT_LOG_LEVEL, |cfg| cfg.log_level.as_str());
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: ServerConfig) -> std::io::Result<()> {
    if !config.site_dir.join("index.html").is_file() {
        tracing::warn!(site_dir = %config.site_dir.display(), "index.html not found; build the client with trunk first");
    }

    let app = routes::app(&config.site_dir);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "vibed-traveller web listening");
    axum::serve(listener, app).await
}
