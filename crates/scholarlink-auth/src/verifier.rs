use async_trait::async_trait;
use thiserror::Error;

use crate::claims::IdentityClaims;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("token signed with unknown key {0}")]
    UnknownKey(String),
    #[error("token carries no email claim")]
    MissingEmail,
    #[error("failed to fetch identity provider keys: {0}")]
    KeyFetch(#[source] reqwest::Error),
}

/// Turns an opaque bearer credential into verified claims.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<IdentityClaims, VerifyError>;
}
