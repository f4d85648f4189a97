//! User record model.

use serde::{Deserialize, Serialize};

use avenue_core::types::{Timestamp, UserId};

use crate::storage::UserQuota;

/// An account, in its canonical (most complete) shape.
///
/// Members that older producers do not send are optional and are left out
/// of the wire form again when absent, so narrower records round-trip
/// unchanged. Decoding with serde runs the same checks as
/// [`parse_user`](super::parse_user).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct User {
    /// Primary key, immutable once assigned.
    pub id: UserId,
    /// Login email, unique among non-deleted users.
    pub email: String,
    /// Given name; `None` when unknown, which is not the same as `""`.
    pub first_name: Option<String>,
    /// Family name; `None` when unknown.
    pub last_name: Option<String>,
    /// Whether the account may authenticate.
    pub can_login: bool,
    /// Elevated privilege flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    /// Storage budget in bytes; `0` means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota: Option<u64>,
    /// Bytes currently attributed to the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_used: Option<u64>,
    /// Creation time, immutable.
    pub created_at: Timestamp,
    /// Last mutation; `None` if never updated.
    pub updated_at: Option<Timestamp>,
    /// Soft-deletion time.
    pub deleted_at: Option<Timestamp>,
}

/// Which revision of the user shape a record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserRevision {
    /// Identity, names, login flag, and timestamps only.
    Base,
    /// Adds `isAdmin`.
    WithAdmin,
    /// Adds `quota` and `spaceUsed`.
    WithQuota,
}

impl User {
    /// Check if the user has been soft deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if the user may log in right now.
    pub fn is_login_allowed(&self) -> bool {
        self.can_login && !self.is_deleted()
    }

    /// Check if this user has admin privileges. Absent flag means no.
    pub fn is_administrator(&self) -> bool {
        self.is_admin.unwrap_or(false)
    }

    /// Full name when known, otherwise the email address.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }

    /// The narrowest revision that carries every member present here.
    pub fn revision(&self) -> UserRevision {
        if self.quota.is_some() || self.space_used.is_some() {
            UserRevision::WithQuota
        } else if self.is_admin.is_some() {
            UserRevision::WithAdmin
        } else {
            UserRevision::Base
        }
    }

    /// Quota view of this account.
    pub fn quota(&self) -> UserQuota {
        UserQuota::new(self.quota, self.space_used.unwrap_or(0))
    }

    /// Project onto the deprecated base shape.
    pub fn profile(&self) -> UserProfile {
        UserProfile::from(self)
    }
}

/// The base revision of the user shape, without privilege or quota members.
///
/// Kept for consumers that still expect the earliest record layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub can_login: bool,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            can_login: user.can_login,
            created_at: user.created_at.clone(),
            updated_at: user.updated_at.clone(),
            deleted_at: user.deleted_at.clone(),
        }
    }
}

impl From<UserProfile> for User {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            can_login: profile.can_login,
            is_admin: None,
            quota: None,
            space_used: None,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
            deleted_at: profile.deleted_at,
        }
    }
}
