use scholarlink_auth::IdentityClaims;
use scholarlink_core::AppError;
use scholarlink_db::UserRepository;
use scholarlink_models::{NewUser, User};
use tracing::{info, instrument};

pub struct AuthService;

impl AuthService {
    /// Return the user for these claims, creating a student record the first time.
    #[instrument(skip(users, claims), fields(uid = %claims.uid))]
    pub async fn login(
        users: &dyn UserRepository,
        claims: &IdentityClaims,
    ) -> Result<User, AppError> {
        let user = users
            .find_or_create(NewUser {
                uid: claims.uid.clone(),
                name: claims.display_name().to_string(),
                email: claims.email.clone(),
            })
            .await
            .map_err(AppError::database)?;

        info!(user_id = %user.id, role = %user.role, "user logged in");
        Ok(user)
    }
}
