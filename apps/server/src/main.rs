#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use axum::Router;
use mood_notebook_api::{construct_router, state::State};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Mood Notebook API Service");

    let config = config::Config::from_env()?;
    tracing::info!("Loaded configuration: endpoint={}", config.inference.endpoint);

    if config.inference.resolve_api_key().is_none() {
        tracing::warn!(
            "{} not set. Remote classification will answer 500 until the credential is configured.",
            config.inference.secret_name
        );
    }

    let state = Arc::new(State::new(config.inference.clone()));

    let app = Router::new()
        .merge(construct_router(state))
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
