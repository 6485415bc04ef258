//! # ScholarLink Models
//!
//! Domain records and request/response DTOs.
//!
//! # Modules
//!
//! - [`users`]: Users, roles and the public user view
//! - [`research`]: Research postings and eligibility criteria
//! - [`applications`]: Student applications to research postings
//! - [`discussions`]: Discussion threads (read path only)
//!
//! Record ids are opaque strings. New ids come from [`new_id`].

pub mod applications;
pub mod discussions;
pub mod research;
pub mod users;

pub use applications::{
    Application, ApplicationCreatedResponse, CreateApplicationDto, NewApplication,
};
pub use discussions::{Discussion, DiscussionWithCreator};
pub use research::{
    CreateResearchDto, Eligibility, NewResearch, Research, ResearchStatus, ResearchWithProfessor,
};
pub use users::{NewUser, User, UserContact, UserRole, UserSummary};

/// Generate a fresh document id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
