//! Role-based authorization.
//!
//! The caller's role always comes from the persisted user record keyed by
//! the verified subject id. Nothing in the token is trusted for role.
//!
//! Handlers declare the role they need with an extractor:
//!
//! ```rust,ignore
//! pub async fn create_research(
//!     RequireProfessor(professor): RequireProfessor,
//!     ValidatedJson(dto): ValidatedJson<CreateResearchDto>,
//! ) -> Result<(StatusCode, Json<Research>), AppError> {
//!     // Only professors reach this point
//! }
//! ```
//!
//! Extractors run before the handler body, so a rejected caller never
//! reaches a persistence write.

use axum::{extract::FromRequestParts, http::request::Parts};
use scholarlink_core::AppError;
use scholarlink_db::UserRepository;
use scholarlink_models::{User, UserRole};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub const PROFILE_MISSING_MESSAGE: &str = "User profile not found. Log in first.";

/// Load the persisted user behind a verified identity.
pub async fn current_user(
    users: &dyn UserRepository,
    auth_user: &AuthUser,
) -> Result<User, AppError> {
    users
        .find_by_uid(auth_user.uid())
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::forbidden(PROFILE_MISSING_MESSAGE))
}

pub fn check_role(user: &User, required_role: UserRole) -> Result<(), AppError> {
    if user.role != required_role {
        return Err(AppError::forbidden(format!(
            "Access denied. Required role: {}, but user has role: {}",
            required_role, user.role
        )));
    }

    Ok(())
}

/// Any logged-in user with a profile, whatever the role.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        let user = current_user(state.users.as_ref(), &auth_user).await?;
        Ok(CurrentUser(user))
    }
}

/// Define an extractor that admits only users holding one role.
#[macro_export]
macro_rules! require_role {
    ($name:ident, $role:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub scholarlink_models::User);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = scholarlink_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let $crate::middleware::role::CurrentUser(user) =
                    <$crate::middleware::role::CurrentUser as axum::extract::FromRequestParts<
                        $crate::state::AppState,
                    >>::from_request_parts(parts, state)
                    .await?;

                $crate::middleware::role::check_role(&user, $role)?;

                Ok($name(user))
            }
        }
    };
}

require_role!(RequireStudent, UserRole::Student);
require_role!(RequireProfessor, UserRole::Professor);
