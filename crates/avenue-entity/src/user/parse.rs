//! Parsing raw wire data into [`User`] records.

use serde_json::Value;
use validator::ValidateEmail;

use avenue_core::ValidationError;
use avenue_core::config::{ContractConfig, QuotaPolicy};

use super::model::{User, UserProfile};
use crate::wire::Fields;

/// Parse a user record under the default contract policy.
pub fn parse_user(raw: &Value) -> Result<User, ValidationError> {
    parse_user_with(raw, &ContractConfig::default())
}

/// Parse a user record under the given contract policy.
///
/// Required members are `id`, `email`, `canLogin`, and `createdAt`. Byte
/// counts must not be negative. `spaceUsed` may not exceed a limited
/// `quota`, and a soft-deleted user may not keep `canLogin`; both checks
/// can be relaxed to warnings through `config`.
pub fn parse_user_with(raw: &Value, config: &ContractConfig) -> Result<User, ValidationError> {
    let fields = Fields::of(raw)?;

    let id = fields.required_user_id("id")?;
    let email = fields.required_str("email")?;
    validate_email(email, config.max_email_length)?;

    let user = User {
        id,
        email: email.to_string(),
        first_name: fields.optional_str("firstName")?.map(str::to_string),
        last_name: fields.optional_str("lastName")?.map(str::to_string),
        can_login: fields.required_bool("canLogin")?,
        is_admin: fields.optional_bool("isAdmin")?,
        quota: fields.optional_bytes("quota")?,
        space_used: fields.optional_bytes("spaceUsed")?,
        created_at: fields.required_timestamp("createdAt")?,
        updated_at: fields.optional_timestamp("updatedAt")?,
        deleted_at: fields.optional_timestamp("deletedAt")?,
    };

    check_quota(&user, config.quota_policy)?;
    check_deleted_login(&user, config.reject_deleted_login)?;

    tracing::debug!(user_id = %user.id, revision = ?user.revision(), "Parsed user record");
    Ok(user)
}

impl TryFrom<Value> for User {
    type Error = ValidationError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        parse_user(&raw)
    }
}

impl TryFrom<Value> for UserProfile {
    type Error = ValidationError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        parse_user(&raw).map(|user| user.profile())
    }
}

fn validate_email(email: &str, max_length: usize) -> Result<(), ValidationError> {
    if email.len() > max_length {
        return Err(ValidationError::new(
            "email",
            format!("must be at most {max_length} bytes"),
        ));
    }
    if !email.to_string().validate_email() {
        return Err(ValidationError::new(
            "email",
            format!("'{email}' is not a valid email address"),
        ));
    }
    Ok(())
}

fn check_quota(user: &User, policy: QuotaPolicy) -> Result<(), ValidationError> {
    let (Some(quota), Some(used)) = (user.quota, user.space_used) else {
        return Ok(());
    };
    // A quota of zero is unlimited.
    if quota == 0 || used <= quota {
        return Ok(());
    }

    match policy {
        QuotaPolicy::Reject => Err(ValidationError::new(
            "spaceUsed",
            format!("{used} bytes exceeds quota of {quota} bytes"),
        )),
        QuotaPolicy::Warn => {
            tracing::warn!(
                user_id = %user.id,
                space_used = used,
                quota,
                "Accepting user whose space used exceeds quota"
            );
            Ok(())
        }
    }
}

fn check_deleted_login(user: &User, reject: bool) -> Result<(), ValidationError> {
    if !user.can_login || !user.is_deleted() {
        return Ok(());
    }
    if reject {
        return Err(ValidationError::new(
            "canLogin",
            "a soft-deleted user must not be able to log in",
        ));
    }
    tracing::warn!(user_id = %user.id, "Accepting soft-deleted user with canLogin set");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_user() -> Value {
        json!({
            "id": 7,
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": null,
            "canLogin": true,
            "isAdmin": false,
            "quota": 5000,
            "spaceUsed": 1200,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-02-03T04:05:06Z",
            "deletedAt": null
        })
    }

    #[test]
    fn test_parse_full_user() {
        let user = parse_user(&full_user()).unwrap();
        assert_eq!(user.id.get(), 7);
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert_eq!(user.last_name, None);
        assert_eq!(user.quota, Some(5000));
        assert_eq!(user.space_used, Some(1200));
        assert!(user.updated_at.is_some());
    }

    #[test]
    fn test_empty_name_is_not_absent() {
        let mut raw = full_user();
        raw["firstName"] = json!("");
        let user = parse_user(&raw).unwrap();
        assert_eq!(user.first_name.as_deref(), Some(""));
    }

    #[test]
    fn test_required_fields() {
        for field in ["id", "email", "canLogin", "createdAt"] {
            let mut raw = full_user();
            raw.as_object_mut().unwrap().remove(field);
            let err = parse_user(&raw).unwrap_err();
            assert_eq!(err.field, field);
        }
    }

    #[test]
    fn test_wrong_types() {
        let mut raw = full_user();
        raw["canLogin"] = json!("true");
        assert_eq!(parse_user(&raw).unwrap_err().field, "canLogin");

        let mut raw = full_user();
        raw["id"] = json!("seven");
        assert_eq!(parse_user(&raw).unwrap_err().field, "id");
    }

    #[test]
    fn test_space_used_exceeding_quota_is_rejected() {
        let raw = json!({
            "id": 1,
            "email": "a@b.com",
            "canLogin": true,
            "createdAt": "2024-01-01T00:00:00Z",
            "quota": 1000,
            "spaceUsed": 1200
        });
        let err = parse_user(&raw).unwrap_err();
        assert_eq!(err.field, "spaceUsed");
        assert!(err.reason.contains("exceeds quota"));
    }

    #[test]
    fn test_warn_policy_accepts_over_quota() {
        let mut raw = full_user();
        raw["spaceUsed"] = json!(9000);
        let config = ContractConfig {
            quota_policy: QuotaPolicy::Warn,
            ..ContractConfig::default()
        };
        let user = parse_user_with(&raw, &config).unwrap();
        assert!(user.quota().is_exhausted());
    }

    #[test]
    fn test_zero_quota_is_unlimited() {
        let mut raw = full_user();
        raw["quota"] = json!(0);
        raw["spaceUsed"] = json!(1_000_000);
        assert!(parse_user(&raw).is_ok());
    }

    #[test]
    fn test_negative_space_used() {
        let mut raw = full_user();
        raw["spaceUsed"] = json!(-5);
        assert_eq!(parse_user(&raw).unwrap_err().field, "spaceUsed");

        let mut raw = full_user();
        raw["quota"] = json!(-1);
        assert_eq!(parse_user(&raw).unwrap_err().field, "quota");
    }

    #[test]
    fn test_deleted_user_with_login_is_rejected() {
        let mut raw = full_user();
        raw["deletedAt"] = json!("2024-03-01T00:00:00Z");
        assert_eq!(parse_user(&raw).unwrap_err().field, "canLogin");

        raw["canLogin"] = json!(false);
        let user = parse_user(&raw).unwrap();
        assert!(user.is_deleted());

        raw["canLogin"] = json!(true);
        let relaxed = ContractConfig {
            reject_deleted_login: false,
            ..ContractConfig::default()
        };
        let user = parse_user_with(&raw, &relaxed).unwrap();
        assert!(!user.is_login_allowed());
    }

    #[test]
    fn test_invalid_email() {
        let mut raw = full_user();
        raw["email"] = json!("not-an-email");
        assert_eq!(parse_user(&raw).unwrap_err().field, "email");

        let mut raw = full_user();
        raw["email"] = json!(format!("{}@example.com", "a".repeat(600)));
        assert_eq!(parse_user(&raw).unwrap_err().field, "email");
    }

    #[test]
    fn test_base_revision_has_no_extended_members() {
        let raw = json!({
            "id": 2,
            "email": "grace@example.com",
            "firstName": null,
            "lastName": null,
            "canLogin": true,
            "createdAt": "2023-06-01T12:00:00Z",
            "updatedAt": null,
            "deletedAt": null
        });
        let user = parse_user(&raw).unwrap();
        assert_eq!(user.is_admin, None);
        assert!(!user.is_administrator());
        assert_eq!(user.revision(), crate::user::UserRevision::Base);
    }
}
