//! Identity provider settings.
//!
//! The project id identifies which provider tenant issued a token. It is read
//! from `FIREBASE_PROJECT_ID`, or from the `project_id` field of the service
//! credential bundle named by `FIREBASE_CREDENTIALS`.

use std::fs;

use serde::Deserialize;

use crate::{ConfigError, env_lookup};

pub const DEFAULT_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

pub const ISSUER_PREFIX: &str = "https://securetoken.google.com/";

#[derive(Clone, Debug)]
pub struct IdentityConfig {
    pub project_id: String,
    pub jwks_url: String,
}

#[derive(Deserialize)]
struct CredentialBundle {
    project_id: String,
}

impl IdentityConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_id = match lookup("FIREBASE_PROJECT_ID").filter(|p| !p.trim().is_empty()) {
            Some(project_id) => project_id,
            None => {
                let path = lookup("FIREBASE_CREDENTIALS")
                    .ok_or(ConfigError::Missing("FIREBASE_PROJECT_ID or FIREBASE_CREDENTIALS"))?;
                read_project_id(&path)?
            }
        };

        Ok(Self {
            project_id,
            jwks_url: lookup("FIREBASE_JWKS_URL").unwrap_or_else(|| DEFAULT_JWKS_URL.to_string()),
        })
    }

    /// Expected `iss` claim for tokens of this project.
    pub fn issuer(&self) -> String {
        format!("{}{}", ISSUER_PREFIX, self.project_id)
    }
}

fn read_project_id(path: &str) -> Result<String, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::CredentialsRead {
        path: path.to_string(),
        source,
    })?;

    let bundle: CredentialBundle =
        serde_json::from_str(&raw).map_err(|source| ConfigError::CredentialsParse {
            path: path.to_string(),
            source,
        })?;

    Ok(bundle.project_id)
}
