//! Curate API server binary

use curate_api::{run_server, ApiConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("curate_api=info,tower_http=info")),
        )
        .init();

    let config = ApiConfig::from_env()?;
    run_server(config).await
}
