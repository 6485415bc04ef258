use axum::{Router, routing::post};

use super::controller::apply;
use crate::state::AppState;

pub fn init_applications_router() -> Router<AppState> {
    Router::new().route("/apply", post(apply))
}
