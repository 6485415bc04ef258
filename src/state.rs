use std::sync::Arc;

use scholarlink_auth::TokenVerifier;
use scholarlink_config::CorsConfig;
use scholarlink_db::{
    ApplicationRepository, DiscussionRepository, HealthCheck, ResearchRepository, UserRepository,
};

/// Dependencies shared by every handler.
///
/// Built once at startup from explicitly constructed collaborators; cloning
/// only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub research: Arc<dyn ResearchRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub discussions: Arc<dyn DiscussionRepository>,
    pub health: Arc<dyn HealthCheck>,
    pub verifier: Arc<dyn TokenVerifier>,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Wire every repository to one store.
    pub fn new<S>(store: Arc<S>, verifier: Arc<dyn TokenVerifier>, cors_config: CorsConfig) -> Self
    where
        S: UserRepository
            + ResearchRepository
            + ApplicationRepository
            + DiscussionRepository
            + HealthCheck
            + 'static,
    {
        Self {
            users: store.clone(),
            research: store.clone(),
            applications: store.clone(),
            discussions: store.clone(),
            health: store,
            verifier,
            cors_config,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}
