//! Verification of identity provider ID tokens.
//!
//! ID tokens are RS256 JWTs. A token is accepted when its signature checks
//! against the provider's published JWK set, `aud` equals the project id,
//! `iss` equals `https://securetoken.google.com/<project id>` and it has not
//! expired. The key set is fetched at construction and fetched again when a
//! token names a key id that is not in the current set, at most once per
//! [`REFETCH_COOLDOWN`].

use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::jwk::{Jwk, JwkSet};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use scholarlink_config::IdentityConfig;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::claims::IdentityClaims;
use crate::verifier::{TokenVerifier, VerifyError};

/// Minimum time between two fetches of the provider key set.
pub const REFETCH_COOLDOWN: Duration = Duration::from_secs(60);

/// Claims of an ID token as issued by the provider.
#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
    email: Option<String>,
    name: Option<String>,
}

struct KeyCache {
    set: JwkSet,
    /// When the set was last requested from `jwks_url`, successful or not.
    fetched_at: Option<Instant>,
}

pub struct FirebaseTokenVerifier {
    http: reqwest::Client,
    jwks_url: String,
    validation: Validation,
    refetch_cooldown: Duration,
    keys: RwLock<KeyCache>,
}

impl FirebaseTokenVerifier {
    /// Fetch the provider key set and build a verifier for the configured project.
    pub async fn from_config(config: &IdentityConfig) -> Result<Self, VerifyError> {
        let http = reqwest::Client::new();
        let keys = fetch_keys(&http, &config.jwks_url).await?;
        let verifier = Self::with_keys(config, http, keys);
        verifier.keys.write().await.fetched_at = Some(Instant::now());
        Ok(verifier)
    }

    /// Build a verifier around an already known key set.
    pub fn with_keys(config: &IdentityConfig, http: reqwest::Client, keys: JwkSet) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[config.project_id.as_str()]);
        validation.set_issuer(&[config.issuer()]);
        validation.set_required_spec_claims(&["exp", "sub", "aud", "iss"]);

        Self {
            http,
            jwks_url: config.jwks_url.clone(),
            validation,
            refetch_cooldown: REFETCH_COOLDOWN,
            keys: RwLock::new(KeyCache {
                set: keys,
                fetched_at: None,
            }),
        }
    }

    #[cfg(test)]
    fn with_refetch_cooldown(mut self, cooldown: Duration) -> Self {
        self.refetch_cooldown = cooldown;
        self
    }

    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, VerifyError> {
        if let Some(jwk) = self.keys.read().await.set.find(kid) {
            return to_decoding_key(jwk);
        }

        let mut cache = self.keys.write().await;
        // Another request may have refreshed the set while this one waited.
        if let Some(jwk) = cache.set.find(kid) {
            return to_decoding_key(jwk);
        }

        if cache
            .fetched_at
            .is_some_and(|at| at.elapsed() < self.refetch_cooldown)
        {
            return Err(VerifyError::UnknownKey(kid.to_string()));
        }

        debug!(kid, "key id not in cached set, refetching");
        cache.fetched_at = Some(Instant::now());
        cache.set = fetch_keys(&self.http, &self.jwks_url).await?;

        cache
            .set
            .find(kid)
            .ok_or_else(|| VerifyError::UnknownKey(kid.to_string()))
            .and_then(to_decoding_key)
    }
}

fn to_decoding_key(jwk: &Jwk) -> Result<DecodingKey, VerifyError> {
    DecodingKey::from_jwk(jwk).map_err(|e| VerifyError::InvalidToken(e.to_string()))
}

async fn fetch_keys(http: &reqwest::Client, url: &str) -> Result<JwkSet, VerifyError> {
    http.get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(VerifyError::KeyFetch)?
        .json::<JwkSet>()
        .await
        .map_err(VerifyError::KeyFetch)
}

#[async_trait]
impl TokenVerifier for FirebaseTokenVerifier {
    #[instrument(skip_all)]
    async fn verify(&self, token: &str) -> Result<IdentityClaims, VerifyError> {
        let header = decode_header(token).map_err(|e| VerifyError::InvalidToken(e.to_string()))?;
        let kid = header
            .kid
            .ok_or_else(|| VerifyError::InvalidToken("missing kid header".to_string()))?;

        let key = self.decoding_key(&kid).await?;
        let data = decode::<IdTokenClaims>(token, &key, &self.validation)
            .map_err(|e| VerifyError::InvalidToken(e.to_string()))?;

        let claims = data.claims;
        if claims.sub.is_empty() {
            return Err(VerifyError::InvalidToken("empty subject".to_string()));
        }
        let email = claims.email.ok_or(VerifyError::MissingEmail)?;

        Ok(IdentityClaims {
            uid: claims.sub,
            email,
            name: claims.name,
        })
    }
}
