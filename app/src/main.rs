// Minimal root service: the pipeline's deployment smoke-test target
use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use relay_shared::{load_config, HealthResponse, MessageResponse};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};

// Marker string checked by the pipeline after deploy, typo and all
const DEPLOY_MESSAGE: &str = "deployed vcia CICD";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = load_config()?;

    let app = create_app();

    let addr: SocketAddr = format!("{}:{}", config.app.host, config.app.port).parse()?;
    info!("App service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/message", get(message))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn message() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: DEPLOY_MESSAGE.to_string(),
    })
}
