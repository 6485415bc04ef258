use axum::{Router, routing::get};

use super::controller::list_discussions;
use crate::state::AppState;

pub fn init_discussions_router() -> Router<AppState> {
    Router::new().route("/discussions", get(list_discussions))
}
