use anyhow::Result;
use ingress_github::{app, config::Config};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.bind;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("ingress-github listening on {addr}");
    axum::serve(listener, app(config).into_make_service()).await?;
    Ok(())
}
