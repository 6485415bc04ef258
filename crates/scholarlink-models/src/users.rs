//! User records and roles.
//!
//! A [`User`] is created the first time an identity logs in. Its `uid` is the
//! identity provider's subject id and is never exposed by list endpoints,
//! which return [`UserSummary`] instead.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Role of a user. Role is the only authorization discriminant.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Professor,
    Admin,
}

impl UserRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Professor => "professor",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(UserRole::Student),
            "professor" => Ok(UserRole::Professor),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// A persisted user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: String,
    /// Identity provider subject id.
    pub uid: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub university: Option<String>,
    pub research_interests: Vec<String>,
    pub citation_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Fields captured from the identity claims on first login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub uid: String,
    pub name: String,
    pub email: String,
}

/// User as shown in list responses. Carries no subject id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub university: Option<String>,
    pub research_interests: Vec<String>,
    pub citation_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            university: user.university,
            research_interests: user.research_interests,
            citation_count: user.citation_count,
            created_at: user.created_at,
        }
    }
}

/// Name and email of a referenced user, joined into research and discussion views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserContact {
    pub id: String,
    pub name: String,
    pub email: String,
}
