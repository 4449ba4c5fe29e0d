use anyhow::Result;
use axum::{middleware::from_fn, routing::get, Router};
use relay_shared::load_config;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};

mod client;
mod handlers;
mod middleware;

use client::ListenerClient;
use handlers::AppState;
use middleware::request_logging;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = load_config()?;
    info!("Configuration loaded successfully");
    info!("Listener URL: {}", config.sender.listener_url);

    let state = Arc::new(AppState {
        listener: ListenerClient::new(config.sender.listener_url.clone()),
    });
    let app = create_app(state);

    let addr: SocketAddr = format!("{}:{}", config.sender.host, config.sender.port).parse()?;
    info!("Sender service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(state: Arc<AppState>) -> Router {
    let middleware_layer = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(request_logging))
        .into_inner();

    Router::new()
        .route("/health", get(handlers::health))
        .route("/call-listener", get(handlers::call_listener))
        .layer(middleware_layer)
        .with_state(state)
}
