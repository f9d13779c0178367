use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cityscout::{api::AppState, config::AppConfig, web};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let port = config.port;
    let state = AppState::new(config)?;

    web::run(state, port).await
}
