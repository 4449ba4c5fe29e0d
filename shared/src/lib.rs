pub mod config;
pub mod types;

pub use config::{load_config, AppConfig, SenderConfig, ServiceConfig, DEFAULT_LISTENER_URL};
pub use types::{
    CallListenerResponse, ErrorResponse, HealthResponse, MessageResponse, ReceiveResponse,
    RelayError, SENDER_SUCCESS_STATUS, UPSTREAM_ERROR_LABEL,
};
