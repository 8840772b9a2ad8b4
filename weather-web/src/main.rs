use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use weather_core::{Config, WeatherService, provider_from_config};

#[derive(Debug, Parser)]
#[command(name = "weather-web", version, about = "Weather HTTP server")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = Config::load()?;
    if !config.has_api_key() {
        warn!("No API key configured; the provider will reject requests made with the placeholder key");
    }
    let provider = provider_from_config(&config)?;
    let app = weather_web::router(WeatherService::new(Arc::from(provider)));

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("Failed to bind {}", args.addr))?;
    info!("Server running at http://{}", args.addr);

    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}
