use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use tracing::error;

use crate::probe;
use crate::state::{AppState, Probe};

/// Plain-text `true`/`false` body, or a 500 carrying the failure.
pub type ProbeResponse = Result<String, (StatusCode, String)>;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

fn respond(state: &AppState, probe: Probe) -> ProbeResponse {
    state
        .run_probe(probe)
        .map(|passed| passed.to_string())
        .map_err(|e| {
            error!(error = %e, "probe failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
}

// --- Promote ---

pub async fn promote_not_info(State(state): State<Arc<AppState>>) -> ProbeResponse {
    respond(&state, probe::promote::is_not_info)
}

pub async fn promote_error(State(state): State<Arc<AppState>>) -> ProbeResponse {
    respond(&state, probe::promote::is_error)
}

// --- Above ---

pub async fn above_not_info(State(state): State<Arc<AppState>>) -> ProbeResponse {
    respond(&state, probe::above::is_not_info)
}

pub async fn above_warn(State(state): State<Arc<AppState>>) -> ProbeResponse {
    respond(&state, probe::above::is_warn)
}

// --- Below ---

pub async fn below_trace(State(state): State<Arc<AppState>>) -> ProbeResponse {
    respond(&state, probe::below::is_trace)
}

pub async fn below_child_trace(State(state): State<Arc<AppState>>) -> ProbeResponse {
    respond(&state, probe::below::child::is_trace)
}

// --- By default ---

pub async fn bydefault_info(State(state): State<Arc<AppState>>) -> ProbeResponse {
    respond(&state, probe::bydefault::is_info)
}

pub async fn bydefault_not_trace(State(state): State<Arc<AppState>>) -> ProbeResponse {
    respond(&state, probe::bydefault::is_not_trace)
}
