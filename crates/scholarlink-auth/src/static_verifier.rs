use std::collections::HashMap;

use async_trait::async_trait;

use crate::claims::IdentityClaims;
use crate::verifier::{TokenVerifier, VerifyError};

/// Verifier backed by a fixed token-to-claims table.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    tokens: HashMap<String, IdentityClaims>,
}

impl StaticTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>, claims: IdentityClaims) -> Self {
        self.tokens.insert(token.into(), claims);
        self
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<IdentityClaims, VerifyError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| VerifyError::InvalidToken("unknown token".to_string()))
    }
}
