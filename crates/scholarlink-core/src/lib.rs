//! # ScholarLink Core
//!
//! Core types shared by every ScholarLink crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use scholarlink_core::errors::AppError;
//!
//! let error = AppError::forbidden("Only professors can create research postings");
//! ```

pub mod errors;

pub use errors::{AppError, ErrorResponse};
