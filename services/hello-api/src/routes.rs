//! HTTP routes for the greeting API

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::config::Config;

pub const SERVICE_NAME: &str = "hello-world-api";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response body of `/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub hello: String,
    pub health: String,
}

/// Response body of `/hello`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: String,
    pub version: String,
}

/// Response body of `/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Router state
#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<Config>,
}

/// Build the greeting API router
pub fn build_router(config: Config) -> Router {
    let state = ApiState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/hello", get(hello_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Current instant as RFC 3339 in UTC with a `Z` suffix
fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

async fn index_handler() -> impl IntoResponse {
    Json(IndexResponse {
        message: "Welcome to Hello World API".to_string(),
        hello: "/hello".to_string(),
        health: "/health".to_string(),
    })
}

async fn hello_handler(State(api): State<ApiState>) -> impl IntoResponse {
    tracing::info!("Hello endpoint accessed");
    Json(HelloResponse {
        message: api.config.greeting.message.clone(),
        timestamp: now_timestamp(),
        version: API_VERSION.to_string(),
    })
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: now_timestamp(),
    })
}
