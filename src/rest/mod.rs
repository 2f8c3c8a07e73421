// HTTP gateway for the relay handlers.
//
// Endpoints:
//   GET  /health
//   POST /create-checkout
//   GET  /get-all-bugs
//   POST /save-beta-signup
//   POST /send-course-welcome-email
//
// Every route sits behind a permissive CORS layer: OPTIONS preflights get a
// 200 with an empty body, wrong methods on known routes get a 405.

use crate::adapters::{github::GithubTracker, stripe::StripeCheckout};
use crate::config::GatewayConfig;
use crate::core;
use crate::domain::model::{CheckoutPayload, EnrollmentPayload, SignupPayload};
use crate::domain::ports::{CheckoutProvider, IssueTracker};
use crate::utils::error::RelayError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: GatewayConfig,
    pub checkout: Arc<dyn CheckoutProvider>,
    pub tracker: Arc<dyn IssueTracker>,
}

impl AppState {
    /// Wires the real outbound clients from configuration.
    pub fn from_config(config: GatewayConfig) -> Self {
        let client = reqwest::Client::new();
        let checkout: Arc<dyn CheckoutProvider> =
            Arc::new(StripeCheckout::new(&config, client.clone()));
        let tracker: Arc<dyn IssueTracker> = Arc::new(GithubTracker::new(&config, client));
        Self {
            config,
            checkout,
            tracker,
        }
    }
}

pub async fn serve(config: GatewayConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = config.listen_addr.parse()?;
    let router = build_router(AppState::from_config(config));

    tracing::info!("gateway listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/create-checkout", post(create_checkout))
        .route("/get-all-bugs", get(get_all_bugs))
        .route("/save-beta-signup", post(save_beta_signup))
        .route("/send-course-welcome-email", post(send_course_welcome_email))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Shallow taxonomy: bad input gets a descriptive 4xx, everything else a
/// generic 500. Upstream details stay in the logs.
fn error_response(err: &RelayError) -> Response {
    let (status, message) = match err {
        RelayError::ValidationError { message } => {
            (StatusCode::BAD_REQUEST, message.clone())
        }
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    };
    (status, Json(ErrorBody { error: message })).into_response()
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn create_checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutPayload>,
) -> Response {
    match core::checkout::create_checkout(&state.config, state.checkout.as_ref(), payload).await {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "checkout session creation failed");
            error_response(&err)
        }
    }
}

async fn get_all_bugs(State(state): State<AppState>) -> Response {
    match core::bugs::fetch_bug_summary(state.tracker.as_ref()).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "bug listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Failed to fetch bugs",
                    "bugs": [],
                })),
            )
                .into_response()
        }
    }
}

async fn save_beta_signup(Json(payload): Json<SignupPayload>) -> Response {
    match core::signup::record_beta_signup(&payload) {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "beta signup rejected");
            error_response(&err)
        }
    }
}

async fn send_course_welcome_email(Json(payload): Json<EnrollmentPayload>) -> Response {
    match core::signup::record_course_enrollment(&payload) {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "course enrollment rejected");
            error_response(&err)
        }
    }
}
