//! Bridging `validator` results into contract errors.

use validator::{Validate, ValidationErrors};

use avenue_core::ValidationError;

/// Validate a request shape, reporting the first violation by wire name.
///
/// Violations are ordered by field name so the reported one is stable.
pub fn validate_request<R: Validate>(request: &R) -> Result<(), ValidationError> {
    request.validate().map_err(first_violation)
}

fn first_violation(errors: ValidationErrors) -> ValidationError {
    let mut violations: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reason = errs
                .first()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("failed '{}' check", e.code),
                })
                .unwrap_or_else(|| "is invalid".to_string());
            (camel_case(&field), reason)
        })
        .collect();
    violations.sort();

    violations
        .into_iter()
        .next()
        .map(|(field, reason)| ValidationError::new(field, reason))
        .unwrap_or_else(|| ValidationError::new("$", "request is invalid"))
}

/// `first_name` -> `firstName`.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("first_name"), "firstName");
        assert_eq!(camel_case("email"), "email");
        assert_eq!(camel_case("is_admin_flag"), "isAdminFlag");
    }
}
