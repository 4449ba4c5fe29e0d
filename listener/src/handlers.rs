use axum::{extract::State, response::Json};
use relay_shared::ReceiveResponse;
use std::sync::Arc;
use tracing::info;

pub struct ListenerState {
    pub port: u16,
}

/// GET /receive - answer the sender with a greeting and the current time
pub async fn receive(State(state): State<Arc<ListenerState>>) -> Json<ReceiveResponse> {
    info!("Received a request from the Sender!");
    Json(ReceiveResponse::new(state.port))
}
