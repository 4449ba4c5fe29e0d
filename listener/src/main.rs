use anyhow::Result;
use axum::{routing::get, Router};
use relay_shared::load_config;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};

mod handlers;

use handlers::ListenerState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = load_config()?;
    info!("Configuration loaded successfully");

    let state = Arc::new(ListenerState {
        port: config.listener.port,
    });
    let app = create_app(state);

    let addr: SocketAddr =
        format!("{}:{}", config.listener.host, config.listener.port).parse()?;
    info!("Listener service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(state: Arc<ListenerState>) -> Router {
    Router::new()
        .route("/receive", get(handlers::receive))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn get_receive() -> Request<Body> {
        Request::builder()
            .uri("/receive")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_receive_returns_json_with_reply_and_timestamp() {
        let app = create_app(Arc::new(ListenerState { port: 4000 }));

        let response = app.oneshot(get_receive()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("application/json"));

        let body = body_json(response).await;
        assert!(body["reply"].is_string());
        let timestamp = body["timestamp"].as_str().unwrap();
        let parsed = chrono::DateTime::parse_from_rfc3339(timestamp)
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert!(parsed <= chrono::Utc::now());
    }

    #[tokio::test]
    async fn test_concurrent_requests_get_independent_responses() {
        let app = create_app(Arc::new(ListenerState { port: 4000 }));

        let (a, b, c) = tokio::join!(
            app.clone().oneshot(get_receive()),
            app.clone().oneshot(get_receive()),
            app.oneshot(get_receive()),
        );

        for response in [a.unwrap(), b.unwrap(), c.unwrap()] {
            assert_eq!(response.status(), StatusCode::OK);
            let body = body_json(response).await;
            assert!(body["reply"].is_string());
            assert!(body["timestamp"].is_string());
        }
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let app = create_app(Arc::new(ListenerState { port: 4000 }));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
