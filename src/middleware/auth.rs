use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use scholarlink_auth::IdentityClaims;
use scholarlink_core::AppError;
use tracing::debug;

use crate::state::AppState;

pub const NO_TOKEN_MESSAGE: &str = "No token provided";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// The verified identity of the caller.
///
/// Inserted into request extensions by [`require_auth`]. As an extractor it
/// reads that extension, or verifies the bearer token itself on routes
/// without the layer.
#[derive(Debug, Clone)]
pub struct AuthUser(pub IdentityClaims);

impl AuthUser {
    pub fn uid(&self) -> &str {
        &self.0.uid
    }
}

/// Extract `<token>` from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

async fn authenticate(headers: &HeaderMap, state: &AppState) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers).ok_or_else(|| AppError::unauthorized(NO_TOKEN_MESSAGE))?;

    let claims = state.verifier.verify(token).await.map_err(|e| {
        debug!(error = %e, "token verification failed");
        AppError::unauthorized(INVALID_TOKEN_MESSAGE)
    })?;

    Ok(AuthUser(claims))
}

/// Verify the bearer token once and attach [`AuthUser`] to the request.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state).await?;
    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        let auth_user = authenticate(&parts.headers, state).await?;
        parts.extensions.insert(auth_user.clone());
        Ok(auth_user)
    }
}
