use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Verified identity attributes of the caller.
///
/// Carries no role: role is read from the persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdentityClaims {
    /// Subject id at the identity provider.
    pub uid: String,
    pub email: String,
    /// Display name, when the provider has one.
    pub name: Option<String>,
}

impl IdentityClaims {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}
