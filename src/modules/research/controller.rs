use axum::{Json, extract::State, http::StatusCode};
use scholarlink_core::{AppError, ErrorResponse};
use scholarlink_models::{CreateResearchDto, Research, ResearchWithProfessor};
use tracing::instrument;

use super::service::ResearchService;
use crate::middleware::role::RequireProfessor;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Post a research opportunity (professors only)
#[utoipa::path(
    post,
    path = "/api/research",
    request_body = CreateResearchDto,
    responses(
        (status = 201, description = "Research posted", body = Research),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a professor", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Research"
)]
#[instrument(skip_all)]
pub async fn create_research(
    State(state): State<AppState>,
    RequireProfessor(professor): RequireProfessor,
    ValidatedJson(dto): ValidatedJson<CreateResearchDto>,
) -> Result<(StatusCode, Json<Research>), AppError> {
    let research =
        ResearchService::create_research(state.research.as_ref(), &professor, dto).await?;
    Ok((StatusCode::CREATED, Json(research)))
}

/// List research opportunities with their professor's contact details
#[utoipa::path(
    get,
    path = "/api/research",
    responses(
        (status = 200, description = "All research postings", body = Vec<ResearchWithProfessor>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Research"
)]
#[instrument(skip_all)]
pub async fn list_research(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResearchWithProfessor>>, AppError> {
    let research = ResearchService::list_research(state.research.as_ref()).await?;
    Ok(Json(research))
}
