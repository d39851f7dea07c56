use std::collections::HashMap;

use axum::body::{Body, Bytes};
use axum::extract::{Query, Request, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::constants::content_type;
use crate::metrics::TrafficStats;

use super::ServerState;
use super::render::StatsFormat;

/// Echo the request body back with status 200
///
/// The body is counted (and logged in `log` mode) before the response is
/// built. An unreadable body is treated as empty.
pub async fn echo(State(state): State<ServerState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = read_body(body).await;

    state.account(&parts, &body);

    (StatusCode::OK, body).into_response()
}

/// Serve the traffic statistics (`?format=html` for the HTML view)
pub async fn stat(
    State(state): State<ServerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let stats = TrafficStats::from_totals(&state.counters.snapshot_totals());
    StatsFormat::from_query(params.get("format").map(String::as_str)).render(&stats)
}

/// Serve the configured scale-test claim token
///
/// 404 when no token is configured, 405 for anything but GET.
pub async fn claim_token(State(state): State<ServerState>, method: Method) -> Response {
    let Some(token) = state.claim_token.as_deref() else {
        return (StatusCode::NOT_FOUND, "404 page not found\n").into_response();
    };

    if method != Method::GET {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    (
        [(header::CONTENT_TYPE, content_type::TEXT)],
        token.as_str().to_owned(),
    )
        .into_response()
}

async fn read_body(body: Body) -> Bytes {
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Unreadable request body counted as empty: {}", e);
            Bytes::new()
        }
    }
}
