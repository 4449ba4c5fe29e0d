use axum::{extract::State, http::StatusCode, response::Json};
use relay_shared::{CallListenerResponse, ErrorResponse, HealthResponse};
use std::sync::Arc;
use tracing::{error, info};

use crate::client::ListenerClient;

pub struct AppState {
    pub listener: ListenerClient,
}

/// GET /health - static liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// GET /call-listener - forward one request to the listener and relay the outcome
pub async fn call_listener(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CallListenerResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.listener.call().await {
        Ok(body) => {
            info!("Successfully reached listener at {}", state.listener.url());
            Ok(Json(CallListenerResponse::success(body)))
        }
        Err(e) => {
            error!("Failed to reach listener: {:#}", e);
            // {:#} keeps the full cause chain in the details string
            let response = ErrorResponse::upstream(format!("{:#}", e));
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(response)))
        }
    }
}
