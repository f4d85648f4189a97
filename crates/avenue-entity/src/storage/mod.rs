//! Storage accounting.

pub mod quota;

pub use quota::{UserQuota, apply_usage_delta};
