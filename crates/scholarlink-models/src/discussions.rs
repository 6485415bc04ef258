//! Discussion threads. Only the read path exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::users::UserContact;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Discussion {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Id of the author's user record.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiscussionWithCreator {
    #[serde(flatten)]
    pub discussion: Discussion,
    pub creator: Option<UserContact>,
}
