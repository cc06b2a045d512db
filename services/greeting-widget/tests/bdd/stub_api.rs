//! Scriptable stand-in for the greeting API

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// What `/hello` answers with
#[derive(Debug, Clone)]
pub enum StubResponse {
    Greeting { message: String, timestamp: String },
    Status(u16),
    Body(String),
}

#[derive(Debug, Clone)]
struct StubState {
    response: Arc<RwLock<StubResponse>>,
    calls: Arc<AtomicUsize>,
}

#[derive(Debug)]
pub struct StubApi {
    pub base_url: String,
    state: StubState,
    cancel: CancellationToken,
}

impl StubApi {
    pub async fn start(response: StubResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let state = StubState {
            response: Arc::new(RwLock::new(response)),
            calls: Arc::new(AtomicUsize::new(0)),
        };
        let cancel = CancellationToken::new();

        let router = Router::new()
            .route("/hello", get(hello_handler))
            .with_state(state.clone());
        let cancel_for_server = cancel.clone();
        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move { cancel_for_server.cancelled().await })
                .await
                .ok();
        });

        Self {
            base_url,
            state,
            cancel,
        }
    }

    pub async fn respond_with(&self, response: StubResponse) {
        *self.state.response.write().await = response;
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

async fn hello_handler(State(stub): State<StubState>) -> Response {
    stub.calls.fetch_add(1, Ordering::SeqCst);
    match stub.response.read().await.clone() {
        StubResponse::Greeting { message, timestamp } => Json(serde_json::json!({
            "message": message,
            "timestamp": timestamp,
        }))
        .into_response(),
        StubResponse::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        StubResponse::Body(body) => (StatusCode::OK, body).into_response(),
    }
}
