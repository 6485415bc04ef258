//! Discussion threads. Read-only over HTTP.

pub mod controller;
pub mod router;
