use axum::{Router, routing::get};

use super::controller::{get_professors, get_students, get_users};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/professors", get(get_professors))
        .route("/students", get(get_students))
        .route("/users", get(get_users))
}
