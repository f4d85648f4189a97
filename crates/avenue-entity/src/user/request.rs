//! Account request shapes sent by clients.
//!
//! Passwords are accepted on input but never serialized back out.

use serde::{Deserialize, Serialize};
use validator::Validate;

use avenue_core::types::UserId;

/// Admin-initiated account creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(email, length(min = 4, max = 512))]
    pub email: String,
    #[serde(skip_serializing)]
    #[validate(length(min = 4, max = 64))]
    pub password: String,
    #[validate(length(min = 1, max = 64))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Self-service registration. Never grants admin rights.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email, length(min = 4, max = 512))]
    pub email: String,
    #[serde(skip_serializing)]
    #[validate(length(min = 4, max = 64))]
    pub password: String,
    #[validate(length(max = 64))]
    pub first_name: Option<String>,
    #[validate(length(max = 64))]
    pub last_name: Option<String>,
}

/// Profile edit. Empty optional members leave the stored value unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub id: UserId,
    #[validate(email, length(min = 4, max = 512))]
    pub email: Option<String>,
    #[validate(length(max = 64))]
    pub first_name: Option<String>,
    #[validate(length(max = 64))]
    pub last_name: Option<String>,
    #[serde(skip_serializing)]
    #[validate(length(min = 4, max = 64))]
    pub password: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    /// New storage budget in bytes; `0` means unlimited.
    #[serde(default)]
    pub quota: u64,
}

/// Password change for the calling user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}
