use axum::Router;
use axum::routing::any;

use crate::constants::routes;

use super::{ServerState, handlers};

/// Route table: stats and claim token on fixed paths, echo for everything else
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route(routes::STAT, any(handlers::stat))
        .route(routes::CLAIM_TOKEN, any(handlers::claim_token))
        .fallback(handlers::echo)
        .with_state(state)
}
