use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::core::error::{AppError, Result};

lazy_static! {
    /// Regex for validating code fields (discount code, role code, country code)
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "black-friday", "tr", "admin-2024"
    /// - Invalid: "-code", "code-", "code--x", "Code", "code_x"
    pub static ref CODE_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Require a v4 UUID for externally addressable ids.
///
/// Runs before any storage access; non-v4 UUIDs (nil, v1, v7 request ids)
/// never reach a query.
pub fn ensure_uuid_v4(id: Uuid) -> Result<Uuid> {
    if id.get_version_num() == 4 {
        Ok(id)
    } else {
        Err(AppError::Validation(format!(
            "'{}' is not a valid v4 UUID",
            id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_regex_valid() {
        assert!(CODE_REGEX.is_match("black-friday"));
        assert!(CODE_REGEX.is_match("tr"));
        assert!(CODE_REGEX.is_match("admin-2024"));
        assert!(CODE_REGEX.is_match("a"));
    }

    #[test]
    fn test_code_regex_invalid() {
        assert!(!CODE_REGEX.is_match("-code")); // starts with hyphen
        assert!(!CODE_REGEX.is_match("code-")); // ends with hyphen
        assert!(!CODE_REGEX.is_match("code--x")); // double hyphen
        assert!(!CODE_REGEX.is_match("Code")); // uppercase
        assert!(!CODE_REGEX.is_match("code_x")); // underscore
        assert!(!CODE_REGEX.is_match("")); // empty
    }

    #[test]
    fn accepts_v4_uuids() {
        let id = Uuid::new_v4();
        assert_eq!(ensure_uuid_v4(id).unwrap(), id);
    }

    #[test]
    fn rejects_non_v4_uuids() {
        assert!(ensure_uuid_v4(Uuid::nil()).is_err());
        assert!(ensure_uuid_v4(Uuid::now_v7()).is_err());
    }
}
