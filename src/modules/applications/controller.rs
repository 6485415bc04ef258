use axum::{Json, extract::State, http::StatusCode};
use scholarlink_core::{AppError, ErrorResponse};
use scholarlink_models::{ApplicationCreatedResponse, CreateApplicationDto};
use tracing::instrument;

use super::service::ApplicationService;
use crate::middleware::role::RequireStudent;
use crate::state::AppState;
use crate::validator::ValidatedJson;

pub const APPLICATION_SUBMITTED_MESSAGE: &str = "Application submitted successfully";

/// Apply to a research opportunity (students only)
#[utoipa::path(
    post,
    path = "/api/apply",
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationCreatedResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a student", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Applications"
)]
#[instrument(skip_all)]
pub async fn apply(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    ValidatedJson(dto): ValidatedJson<CreateApplicationDto>,
) -> Result<(StatusCode, Json<ApplicationCreatedResponse>), AppError> {
    let application = ApplicationService::apply(state.applications.as_ref(), &student, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationCreatedResponse {
            message: APPLICATION_SUBMITTED_MESSAGE.to_string(),
            application,
        }),
    ))
}
