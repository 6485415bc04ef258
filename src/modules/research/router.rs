use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::controller::{create_research, list_research};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Listing is public, posting requires a verified token.
pub fn init_research_router(state: AppState) -> Router<AppState> {
    Router::new().route(
        "/research",
        get(list_research).merge(
            post(create_research).route_layer(middleware::from_fn_with_state(state, require_auth)),
        ),
    )
}
