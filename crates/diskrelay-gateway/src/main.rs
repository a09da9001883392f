use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use diskrelay_gateway::{App, AppState, Config};
use diskrelay_resolver::{HttpUpstreamClient, MokaResponseCache, ResolverService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = HttpUpstreamClient::new(Duration::from_secs(config.upstream_timeout_secs))?;
    let cache = MokaResponseCache::with_ttl(
        config.cache_capacity,
        Duration::from_secs(config.cache_ttl_secs),
    );
    let resolver = ResolverService::new(client, &config.api_base_url, cache)?;
    let state = AppState::new(Arc::new(resolver), config.public_base_url.clone());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(listen_addr = %listener.local_addr()?, "starting relay server");
    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
