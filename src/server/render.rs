//! Rendering of the statistics payload
//!
//! Pure formatting over an already computed [`TrafficStats`].

use crate::constants::{content_type, routes};
use crate::metrics::TrafficStats;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::fmt::Write as _;

/// Output format selected by the `format` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsFormat {
    #[default]
    Json,
    Html,
}

impl StatsFormat {
    /// `format=html` selects HTML; anything else (or nothing) selects JSON
    #[must_use]
    pub fn from_query(format: Option<&str>) -> Self {
        match format {
            Some(routes::FORMAT_HTML) => Self::Html,
            _ => Self::Json,
        }
    }

    /// Build the HTTP response for `stats`
    pub fn render(self, stats: &TrafficStats) -> Response {
        match self {
            Self::Json => match render_json(stats) {
                Ok(body) => ([(header::CONTENT_TYPE, content_type::JSON)], body).into_response(),
                Err(e) => {
                    tracing::error!("Failed to encode stats: {}", e);
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
            Self::Html => (
                [(header::CONTENT_TYPE, content_type::HTML)],
                render_html(stats),
            )
                .into_response(),
        }
    }
}

/// Pretty-printed JSON (2-space indent) with a trailing newline
pub fn render_json(stats: &TrafficStats) -> serde_json::Result<String> {
    let mut body = serde_json::to_string_pretty(stats)?;
    body.push('\n');
    Ok(body)
}

/// Simple human-readable HTML page
#[must_use]
pub fn render_html(stats: &TrafficStats) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("<html><head><title>Stats</title></head><body>");
    html.push_str("<h1>Traffic stats</h1>");
    html.push_str("<ul>");
    let _ = write!(html, "<li>Total requests: {}</li>", stats.total_requests);
    let _ = write!(html, "<li>Uptime (s): {:.2}</li>", stats.uptime_seconds);
    let _ = write!(
        html,
        "<li>Average requests/sec: {:.4}</li>",
        stats.avg_requests_per_sec
    );
    let _ = write!(html, "<li>Total bytes: {}</li>", stats.total_bytes);
    let _ = write!(
        html,
        "<li>Average bytes/sec: {:.4}</li>",
        stats.avg_bytes_per_sec
    );
    let _ = write!(
        html,
        "<li>Average bytes/request: {:.4}</li>",
        stats.avg_bytes_per_request
    );
    html.push_str("</ul></body></html>");
    html
}
