//! # ScholarLink CLI
//!
//! Administrative operations used by the `scholarlink-cli` binary.
//!
//! Roles can only change here. The HTTP API never lets a caller pick
//! their own role.

use anyhow::{Result, anyhow};
use scholarlink_db::UserRepository;
use scholarlink_models::{User, UserRole};

/// Change the role of the user registered under `email`.
pub async fn set_role(users: &dyn UserRepository, email: &str, role: UserRole) -> Result<User> {
    users
        .set_role(email, role)
        .await?
        .ok_or_else(|| anyhow!("no user registered with email {}", email))
}

/// One line per user: `role  email  name`.
pub async fn list_users(users: &dyn UserRepository, role: Option<UserRole>) -> Result<Vec<String>> {
    let records = users.list_by_role(role).await?;
    Ok(records
        .iter()
        .map(|u| format!("{:<10} {:<32} {}", u.role, u.email, u.name))
        .collect())
}
