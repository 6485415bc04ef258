//! Student applications to research postings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Application {
    pub id: String,
    /// Id of the applying student's user record.
    pub student_id: String,
    /// Research id as supplied by the student.
    pub research_id: String,
    pub application_text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateApplicationDto {
    #[validate(length(min = 1, message = "research_id is required"))]
    pub research_id: String,
    #[validate(length(min = 1, message = "application_text is required"))]
    pub application_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub student_id: String,
    pub research_id: String,
    pub application_text: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApplicationCreatedResponse {
    pub message: String,
    pub application: Application,
}
