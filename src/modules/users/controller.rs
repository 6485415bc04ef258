use axum::{Json, extract::State};
use scholarlink_core::{AppError, ErrorResponse};
use scholarlink_models::{UserRole, UserSummary};
use tracing::instrument;

use super::service::UserService;
use crate::middleware::role::{CurrentUser, RequireProfessor, RequireStudent};
use crate::state::AppState;

/// List professors (students only)
#[utoipa::path(
    get,
    path = "/api/professors",
    responses(
        (status = 200, description = "All professors", body = Vec<UserSummary>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a student", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_professors(
    State(state): State<AppState>,
    RequireStudent(_student): RequireStudent,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    let professors =
        UserService::list_by_role(state.users.as_ref(), Some(UserRole::Professor)).await?;
    Ok(Json(professors))
}

/// List students (professors only)
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students", body = Vec<UserSummary>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a professor", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_students(
    State(state): State<AppState>,
    RequireProfessor(_professor): RequireProfessor,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    let students = UserService::list_by_role(state.users.as_ref(), Some(UserRole::Student)).await?;
    Ok(Json(students))
}

/// List the users the caller may browse
///
/// Students get professors, professors get students, admins get everyone.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users visible to the caller", body = Vec<UserSummary>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller has no user profile", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_users(
    State(state): State<AppState>,
    CurrentUser(viewer): CurrentUser,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    let users = UserService::list_visible_to(state.users.as_ref(), &viewer).await?;
    Ok(Json(users))
}
