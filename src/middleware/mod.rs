//! Request authentication and role checks.
//!
//! # Modules
//!
//! - [`auth`]: Bearer token verification and the [`auth::AuthUser`] extractor
//! - [`role`]: Persisted-role extractors ([`role::CurrentUser`],
//!   [`role::RequireStudent`], [`role::RequireProfessor`])
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::require_auth`] verifies the token and attaches `AuthUser`
//! 3. Role extractors load the caller's user record and compare its role
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::role::RequireStudent;
//!
//! async fn apply(RequireStudent(student): RequireStudent) -> impl IntoResponse {
//!     // Only users whose stored role is student get here
//! }
//! ```

pub mod auth;
pub mod role;
