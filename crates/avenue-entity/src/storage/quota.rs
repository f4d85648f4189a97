//! Per-user storage quota value object.

use serde::{Deserialize, Serialize};

/// Storage budget of one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuota {
    /// Budget in bytes (None = unlimited).
    pub limit: Option<u64>,
    /// Currently used bytes.
    pub used: u64,
}

impl UserQuota {
    /// Create a quota from a stored `quota` member, where `0` means unlimited.
    pub fn new(quota: Option<u64>, used: u64) -> Self {
        Self {
            limit: quota.filter(|q| *q > 0),
            used,
        }
    }

    /// Check if no limit applies.
    pub fn is_unlimited(&self) -> bool {
        self.limit.is_none()
    }

    /// Bytes still available (None if unlimited).
    pub fn remaining(&self) -> Option<u64> {
        self.limit.map(|limit| limit.saturating_sub(self.used))
    }

    /// Check if the quota is used up.
    pub fn is_exhausted(&self) -> bool {
        match self.limit {
            Some(limit) => self.used >= limit,
            None => false,
        }
    }

    /// Check if adding the given number of bytes would exceed the quota.
    pub fn would_exceed(&self, additional: u64) -> bool {
        match self.limit {
            Some(limit) => self.used.saturating_add(additional) > limit,
            None => false,
        }
    }

    /// Largest upload allowed: the remaining budget, capped by `max_file_size`.
    pub fn upload_ceiling(&self, max_file_size: u64) -> u64 {
        match self.remaining() {
            Some(remaining) => remaining.min(max_file_size),
            None => max_file_size,
        }
    }

    /// Usage percentage (0.0 - 100.0+, None if unlimited).
    pub fn usage_percent(&self) -> Option<f64> {
        self.limit
            .map(|limit| (self.used as f64 / limit as f64) * 100.0)
    }
}

/// Apply a signed change (upload or delete) to a usage counter, never
/// going below zero.
pub fn apply_usage_delta(used: u64, delta: i64) -> u64 {
    if delta >= 0 {
        used.saturating_add(delta.unsigned_abs())
    } else {
        used.saturating_sub(delta.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_quota_is_unlimited() {
        let quota = UserQuota::new(Some(0), 500);
        assert!(quota.is_unlimited());
        assert!(!quota.is_exhausted());
        assert!(!quota.would_exceed(u64::MAX));
        assert_eq!(quota.upload_ceiling(100), 100);
        assert_eq!(quota.usage_percent(), None);
    }

    #[test]
    fn test_limited_quota() {
        let quota = UserQuota::new(Some(1000), 400);
        assert_eq!(quota.remaining(), Some(600));
        assert!(!quota.would_exceed(600));
        assert!(quota.would_exceed(601));
        assert_eq!(quota.upload_ceiling(10_000), 600);
        assert_eq!(quota.upload_ceiling(100), 100);
        assert_eq!(quota.usage_percent(), Some(40.0));
    }

    #[test]
    fn test_over_quota() {
        let quota = UserQuota::new(Some(1000), 1200);
        assert!(quota.is_exhausted());
        assert_eq!(quota.remaining(), Some(0));
        assert_eq!(quota.upload_ceiling(50), 0);
    }

    #[test]
    fn test_apply_usage_delta_clamps_at_zero() {
        assert_eq!(apply_usage_delta(100, 50), 150);
        assert_eq!(apply_usage_delta(100, -30), 70);
        assert_eq!(apply_usage_delta(100, -300), 0);
        assert_eq!(apply_usage_delta(u64::MAX, 1), u64::MAX);
        assert_eq!(apply_usage_delta(5, i64::MIN), 0);
    }
}
