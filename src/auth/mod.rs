pub mod password;
pub mod token;

use lazy_static::lazy_static;
use validator::Validate;

use crate::error::AppError;

// Re-export necessary items
pub use password::{hash_password, verify_password};
pub use token::{decode_token, issue_token, Claims, TOKEN_TTL_MINUTES};

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Account credentials accepted by the registration mutation.
#[derive(Debug, Validate)]
pub struct Credentials {
    /// Desired username for the new account.
    /// Must be between 3 and 32 characters, alphanumeric, and can include underscores or hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    /// Password for the new account.
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Checks a username/password pair against the registration rules.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), AppError> {
    let credentials = Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    };
    credentials.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_validation() {
        assert!(validate_credentials("test_user-123", "password123").is_ok());
        assert!(validate_credentials("alice", "secret123").is_ok());

        // Contains space and exclamation
        assert!(validate_credentials("test user!", "password123").is_err());

        // Username too short
        assert!(validate_credentials("tu", "password123").is_err());

        // Password too short
        assert!(validate_credentials("test_user", "123").is_err());
    }

    #[test]
    fn test_validation_failure_maps_to_validation_error() {
        match validate_credentials("tu", "password123") {
            Err(AppError::ValidationError(_)) => {}
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }
}
