use scholarlink_core::AppError;
use scholarlink_db::UserRepository;
use scholarlink_models::{User, UserRole, UserSummary};
use tracing::instrument;

pub struct UserService;

impl UserService {
    #[instrument(skip(users))]
    pub async fn list_by_role(
        users: &dyn UserRepository,
        role: Option<UserRole>,
    ) -> Result<Vec<UserSummary>, AppError> {
        let records = users.list_by_role(role).await.map_err(AppError::database)?;
        Ok(records.into_iter().map(UserSummary::from).collect())
    }

    /// The role a caller gets to browse: students see professors,
    /// professors see students, admins see everyone.
    pub fn visible_role(viewer: &User) -> Option<UserRole> {
        match viewer.role {
            UserRole::Student => Some(UserRole::Professor),
            UserRole::Professor => Some(UserRole::Student),
            UserRole::Admin => None,
        }
    }

    #[instrument(skip(users, viewer), fields(viewer_id = %viewer.id, viewer_role = %viewer.role))]
    pub async fn list_visible_to(
        users: &dyn UserRepository,
        viewer: &User,
    ) -> Result<Vec<UserSummary>, AppError> {
        Self::list_by_role(users, Self::visible_role(viewer)).await
    }
}
