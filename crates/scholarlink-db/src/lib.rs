//! # ScholarLink DB
//!
//! Persistence for users, research postings, applications and discussions.
//!
//! Handlers depend on the repository traits in [`repositories`] only.
//! [`PgStore`] implements all of them over PostgreSQL; `MemoryStore`
//! (feature `test-utils`) implements them in process for tests.
//!
//! # Example
//!
//! ```ignore
//! use scholarlink_db::PgStore;
//!
//! let store = PgStore::connect(&config.database).await?;
//! store.migrate().await?;
//! ```

pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;
pub mod repositories;

pub use error::StoreError;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use repositories::{
    ApplicationRepository, DiscussionRepository, HealthCheck, ResearchRepository, UserRepository,
};
