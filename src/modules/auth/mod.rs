//! Login. Creates the user record on first sight of an identity.

pub mod controller;
pub mod router;
pub mod service;
