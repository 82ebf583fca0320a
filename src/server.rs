//! HTTP transport shell.
//!
//! A thin axum layer over the scoring engine: request parsing, the
//! health endpoint, CORS, and the static domain-list dump. All engine
//! semantics live in [`crate::verifier`] and [`crate::bulk`].

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::bulk::{self, BulkOptions, MAX_BULK_EMAILS};
use crate::config::Config;
use crate::verifier::EmailVerifier;

const SERVICE_NAME: &str = "mailgrade";

pub struct AppState {
    pub verifier: Arc<EmailVerifier>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkRequest {
    emails: Option<Vec<String>>,
    #[serde(default)]
    options: BulkRequestOptions,
}

#[derive(Debug, Default, Deserialize)]
pub struct BulkRequestOptions {
    batch_size: Option<usize>,
    delay: Option<u64>,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now(),
        "service": SERVICE_NAME,
    }))
}

async fn verify(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VerifyRequest>,
) -> Response {
    let email = match request.email {
        Some(email) => email,
        None => return error_response(StatusCode::BAD_REQUEST, "Email is required"),
    };

    // The engine is total over its input, but an unexpected fault must
    // not take the process down with it.
    let verifier = Arc::clone(&state.verifier);
    match catch_unwind(AssertUnwindSafe(|| verifier.verify(&email))) {
        Ok(Some(result)) => Json(result).into_response(),
        Ok(None) => error_response(StatusCode::BAD_REQUEST, "Email is required"),
        Err(_) => {
            log::error!("Verification panicked");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

async fn verify_bulk(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BulkRequest>,
) -> Response {
    let emails = match request.emails {
        Some(emails) if !emails.is_empty() => emails,
        _ => return error_response(StatusCode::BAD_REQUEST, "Emails array is required"),
    };

    if emails.len() > MAX_BULK_EMAILS {
        return error_response(StatusCode::BAD_REQUEST, "Maximum 1000 emails per request");
    }

    let options = BulkOptions::new(request.options.batch_size, request.options.delay);
    log::debug!(
        "Bulk verification: {} addresses, batch_size={}, delay={:?}",
        emails.len(),
        options.batch_size,
        options.delay
    );

    let report = bulk::verify_bulk(Arc::clone(&state.verifier), &emails, options).await;

    Json(json!({
        "results": report.results,
        "stats": report.stats,
        "processed": report.stats.total,
        "timestamp": Utc::now(),
    }))
    .into_response()
}

async fn disposable_domains(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let domains = state.verifier.disposable_domains();

    Json(json!({
        "count": domains.len(),
        "domains": domains,
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/verify", post(verify))
        .route("/verify-bulk", post(verify_bulk))
        .route("/disposable-domains", get(disposable_domains))
        .layer(cors)
        .with_state(state)
}

pub async fn run(config: &Config) -> Result<()> {
    let state = Arc::new(AppState {
        verifier: Arc::new(EmailVerifier::new()),
    });
    let app = router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    log::info!("{SERVICE_NAME} listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
