use axum::{Json, extract::State};
use scholarlink_core::{AppError, ErrorResponse};
use scholarlink_models::DiscussionWithCreator;
use tracing::instrument;

use crate::state::AppState;

/// List discussions with their creator's contact details
#[utoipa::path(
    get,
    path = "/api/discussions",
    responses(
        (status = 200, description = "All discussions", body = Vec<DiscussionWithCreator>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Discussions"
)]
#[instrument(skip_all)]
pub async fn list_discussions(
    State(state): State<AppState>,
) -> Result<Json<Vec<DiscussionWithCreator>>, AppError> {
    let discussions = state
        .discussions
        .list_with_creator()
        .await
        .map_err(AppError::database)?;
    Ok(Json(discussions))
}
