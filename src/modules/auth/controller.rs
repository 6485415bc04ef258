use axum::{Json, extract::State};
use scholarlink_core::{AppError, ErrorResponse};
use scholarlink_models::User;
use tracing::instrument;

use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Log in with an identity provider token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    responses(
        (status = 200, description = "Existing or newly created user", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user = AuthService::login(state.users.as_ref(), &auth_user.0).await?;
    Ok(Json(user))
}
