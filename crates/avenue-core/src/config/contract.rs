//! Validation policy for the data contract.

use serde::{Deserialize, Serialize};

/// What to do with a user whose `spaceUsed` exceeds a limited `quota`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotaPolicy {
    /// Fail the parse with a validation error on `spaceUsed`.
    #[default]
    Reject,
    /// Accept the record and log a warning.
    Warn,
}

/// Contract validation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Handling of `spaceUsed > quota`.
    #[serde(default)]
    pub quota_policy: QuotaPolicy,
    /// Reject soft-deleted users that still have `canLogin` set.
    #[serde(default = "default_true")]
    pub reject_deleted_login: bool,
    /// Treat a `parent` of `""` as a root (`null`) reference.
    #[serde(default = "default_true")]
    pub normalize_empty_parent: bool,
    /// Maximum accepted email length in bytes.
    #[serde(default = "default_max_email_length")]
    pub max_email_length: usize,
    /// Global per-upload ceiling in bytes, applied on top of user quotas.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            quota_policy: QuotaPolicy::default(),
            reject_deleted_login: true,
            normalize_empty_parent: true,
            max_email_length: default_max_email_length(),
            max_file_size: default_max_file_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_email_length() -> usize {
    512
}

fn default_max_file_size() -> u64 {
    1024 * 1024 * 1024
}
