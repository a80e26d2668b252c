#![forbid(unsafe_code)]

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use anodize_store::inventory::ClockInventory;
use anodize_store::{build_router, AppState, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StoreConfig::from_env();
    if config.stripe_secret_key.is_none() {
        warn!("STRIPE_SECRET_KEY unset; checkout will refuse requests");
    }
    let inventory = Arc::new(ClockInventory { total: config.total_units });
    let bind = config.bind.clone();
    let state = AppState::new(config, inventory);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind).await?;
    info!(addr = %listener.local_addr()?, "anodize store listening");
    axum::serve(listener, app).await?;
    Ok(())
}
