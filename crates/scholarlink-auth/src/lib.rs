//! # ScholarLink Auth
//!
//! Identity token verification.
//!
//! The API never issues credentials of its own. Callers present an ID token
//! from the identity provider and a [`TokenVerifier`] turns it into
//! [`IdentityClaims`].
//!
//! - [`claims`]: The verified identity attached to a request
//! - [`verifier`]: The [`TokenVerifier`] seam and its error type
//! - [`firebase`]: Verifier for provider-signed RS256 ID tokens
//! - `static_verifier`: Fixed token table for tests (`test-utils` feature)

pub mod claims;
pub mod firebase;
#[cfg(any(test, feature = "test-utils"))]
pub mod static_verifier;
pub mod verifier;

pub use claims::IdentityClaims;
pub use firebase::FirebaseTokenVerifier;
#[cfg(any(test, feature = "test-utils"))]
pub use static_verifier::StaticTokenVerifier;
pub use verifier::{TokenVerifier, VerifyError};
