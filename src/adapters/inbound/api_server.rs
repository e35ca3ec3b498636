//! MX Check API Server
//!
//! HTTP API exposing the MX classification use case.

use crate::application::MxCheckService;
use crate::domain::entities::MxQuery;
use crate::domain::errors::CheckError;
use crate::infrastructure::shutdown_signal;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// API Server state.
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<MxCheckService>,
}

impl ApiState {
    pub fn new(service: Arc<MxCheckService>) -> Self {
        Self { service }
    }
}

/// API Server for MX checks.
pub struct ApiServer {
    listen_addr: String,
    state: ApiState,
}

impl ApiServer {
    pub fn new(listen_addr: String, service: Arc<MxCheckService>) -> Self {
        Self {
            listen_addr,
            state: ApiState::new(service),
        }
    }

    /// Build the router with all routes and layers.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/check-mx", post(check_mx_handler))
            .route("/health", get(health_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the API server until a shutdown signal arrives.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn run(&self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.listen_addr).await?;
        let port = listener.local_addr()?.port();
        tracing::info!("MX Record API listening on port {}", port);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

impl IntoResponse for CheckError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

// Handler functions

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// A body that is missing or not valid JSON counts as a missing domain.
///
/// `domain` must be a JSON string. Any other type (`{"domain": 42}`,
/// `{"domain": true}`) fails deserialization and is answered with the
/// same 400 as an absent field; no lookup is attempted.
async fn check_mx_handler(
    State(state): State<ApiState>,
    body: Option<Json<MxQuery>>,
) -> Result<impl IntoResponse, CheckError> {
    let query = body.map(|Json(q)| q).unwrap_or_default();

    match state.service.check(query.domain.as_deref()).await {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            if let CheckError::Resolution(ref cause) = err {
                tracing::error!("error resolving MX records: {}", cause);
            }
            Err(err)
        }
    }
}
