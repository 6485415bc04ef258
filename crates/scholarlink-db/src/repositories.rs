//! Repository traits, one per record kind.

use async_trait::async_trait;
use scholarlink_models::{
    Application, DiscussionWithCreator, NewApplication, NewResearch, NewUser, Research,
    ResearchWithProfessor, User, UserRole,
};

use crate::error::StoreError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Return the user holding `new.uid`, creating it with role student when
    /// absent. A record stored under `new.email` with another subject id is
    /// relinked to `new.uid` instead of duplicated. Afterwards
    /// [`find_by_uid`](Self::find_by_uid) with `new.uid` returns the same
    /// record. Concurrent calls for one identity yield one record.
    async fn find_or_create(&self, new: NewUser) -> Result<User, StoreError>;

    /// Users with the given role, or all users for `None`, oldest first.
    async fn list_by_role(&self, role: Option<UserRole>) -> Result<Vec<User>, StoreError>;

    async fn set_role(&self, email: &str, role: UserRole) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait ResearchRepository: Send + Sync {
    async fn create(&self, new: NewResearch) -> Result<Research, StoreError>;

    async fn list_with_professor(&self) -> Result<Vec<ResearchWithProfessor>, StoreError>;
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Insert the application and, in the same transaction, add the student
    /// to the applicants of the named research when it exists.
    async fn create(&self, new: NewApplication) -> Result<Application, StoreError>;
}

#[async_trait]
pub trait DiscussionRepository: Send + Sync {
    async fn list_with_creator(&self) -> Result<Vec<DiscussionWithCreator>, StoreError>;
}

#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
}
