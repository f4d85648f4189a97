//! # avenue-core
//!
//! Core crate for the Avenue data contract. Contains configuration
//! schemas, typed identifiers, and the unified error system shared by the
//! entity layer and the CLI.
//!
//! This crate has **no** internal dependencies on other Avenue crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ValidationError};
pub use result::AppResult;
