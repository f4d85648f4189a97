//! Core type definitions used across the Avenue workspace.

pub mod id;
pub mod timestamp;

pub use id::*;
pub use timestamp::Timestamp;
