//! Research postings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::users::UserContact;

/// Lifecycle state of a posting. Nothing in the API closes a posting yet.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "research_status", rename_all = "lowercase")]
pub enum ResearchStatus {
    #[default]
    Open,
    Closed,
}

/// Who may apply to a posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Eligibility {
    #[serde(default)]
    pub degree: Option<String>,
    /// Years of study that qualify, e.g. `[3, 4]`.
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Research {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Id of the owning professor's user record.
    pub professor_id: String,
    pub university: Option<String>,
    pub eligibility: Eligibility,
    pub status: ResearchStatus,
    /// User ids of students who applied.
    pub applicants: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Research posting with the owning professor's contact joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResearchWithProfessor {
    #[serde(flatten)]
    pub research: Research,
    pub professor: Option<UserContact>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateResearchDto {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    /// Defaults to the professor's own university.
    pub university: Option<String>,
    #[serde(default)]
    pub eligibility: Eligibility,
}

/// Everything the store needs to insert a posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResearch {
    pub title: String,
    pub description: String,
    pub professor_id: String,
    pub university: Option<String>,
    pub eligibility: Eligibility,
}

impl NewResearch {
    pub fn from_dto(
        dto: CreateResearchDto,
        professor_id: String,
        fallback_university: Option<String>,
    ) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            professor_id,
            university: dto.university.or(fallback_university),
            eligibility: dto.eligibility,
        }
    }
}
