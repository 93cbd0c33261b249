use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Minutes before an issued access token stops validating.
pub const TOKEN_TTL_MINUTES: i64 = 60;

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Username the token was issued for. Optional so that a correctly
    /// signed token minted without the claim still decodes and can be
    /// rejected as an outcome rather than a parse failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

fn signing_secret() -> Result<String, AppError> {
    std::env::var("JWT_SECRET")
        .map_err(|_| AppError::InternalServerError("JWT_SECRET not set".into()))
}

/// Issues a signed access token for a username, expiring after
/// [`TOKEN_TTL_MINUTES`].
///
/// Requires the `JWT_SECRET` environment variable for signing.
pub fn issue_token(username: &str) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::minutes(TOKEN_TTL_MINUTES))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        user: Some(username.to_owned()),
        exp: expiration,
    };

    let secret = signing_secret()?;
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to issue token: {}", e)))
}

/// Verifies a token's signature and expiry and returns its claims.
///
/// Fails with `AppError::Unauthorized` when the token is malformed, its
/// signature is invalid, or it has expired. A decoded token may still lack
/// the `user` claim; callers treat that as their own failure branch.
pub fn decode_token(token: &str) -> Result<Claims, AppError> {
    let secret = signing_secret()?;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;

    lazy_static! {
        static ref JWT_ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    }

    // Helper to run test logic with a temporarily set JWT_SECRET
    fn run_with_temp_jwt_secret<F>(secret_value: &str, test_logic: F)
    where
        F: FnOnce(),
    {
        let _guard = JWT_ENV_LOCK.lock().unwrap();

        let original_secret_val = std::env::var("JWT_SECRET").ok();
        std::env::set_var("JWT_SECRET", secret_value);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(test_logic));

        if let Some(original) = original_secret_val {
            std::env::set_var("JWT_SECRET", original);
        } else {
            std::env::remove_var("JWT_SECRET");
        }

        if let Err(panic_payload) = result {
            std::panic::resume_unwind(panic_payload);
        }
    }

    #[test]
    fn test_token_issue_and_decode() {
        run_with_temp_jwt_secret("test_secret_for_issue_decode", || {
            let token = issue_token("alice").unwrap();
            assert!(!token.is_empty());

            let claims = decode_token(&token).unwrap();
            assert_eq!(claims.user.as_deref(), Some("alice"));
        });
    }

    #[test]
    fn test_expired_token_is_rejected() {
        run_with_temp_jwt_secret("test_secret_for_expiration", || {
            let expiration = chrono::Utc::now()
                .checked_sub_signed(chrono::Duration::minutes(2 * TOKEN_TTL_MINUTES))
                .expect("valid timestamp")
                .timestamp() as usize;

            let claims = Claims {
                user: Some("alice".to_string()),
                exp: expiration,
            };
            let expired_token = encode(
                &Header::default(),
                &claims,
                &EncodingKey::from_secret("test_secret_for_expiration".as_bytes()),
            )
            .unwrap();

            match decode_token(&expired_token) {
                Err(AppError::Unauthorized(msg)) => {
                    assert!(msg.contains("ExpiredSignature"), "unexpected message: {}", msg);
                }
                Ok(_) => panic!("token should have expired"),
                Err(e) => panic!("unexpected error type: {:?}", e),
            }
        });
    }

    #[test]
    fn test_wrong_signature_is_rejected() {
        run_with_temp_jwt_secret("a_completely_different_secret", || {
            let expiration = chrono::Utc::now()
                .checked_add_signed(chrono::Duration::minutes(TOKEN_TTL_MINUTES))
                .expect("valid timestamp")
                .timestamp() as usize;

            let claims = Claims {
                user: Some("alice".to_string()),
                exp: expiration,
            };
            let foreign_token = encode(
                &Header::default(),
                &claims,
                &EncodingKey::from_secret("some_other_secret".as_bytes()),
            )
            .unwrap();

            match decode_token(&foreign_token) {
                Err(AppError::Unauthorized(msg)) => {
                    assert!(
                        msg.contains("InvalidSignature") || msg.contains("InvalidToken"),
                        "unexpected message: {}",
                        msg
                    );
                }
                Ok(_) => panic!("token signed with another secret should not verify"),
                Err(e) => panic!("unexpected error type: {:?}", e),
            }
        });
    }

    #[test]
    fn test_token_without_user_claim_still_decodes() {
        run_with_temp_jwt_secret("test_secret_for_missing_claim", || {
            let expiration = chrono::Utc::now()
                .checked_add_signed(chrono::Duration::minutes(TOKEN_TTL_MINUTES))
                .expect("valid timestamp")
                .timestamp() as usize;

            let token = encode(
                &Header::default(),
                &serde_json::json!({ "exp": expiration }),
                &EncodingKey::from_secret("test_secret_for_missing_claim".as_bytes()),
            )
            .unwrap();

            let claims = decode_token(&token).unwrap();
            assert!(claims.user.is_none());
        });
    }

    #[test]
    fn test_missing_secret_is_a_server_fault() {
        run_with_temp_jwt_secret("placeholder", || {
            std::env::remove_var("JWT_SECRET");
            match issue_token("alice") {
                Err(AppError::InternalServerError(msg)) => {
                    assert!(msg.contains("JWT_SECRET"));
                }
                other => panic!("expected InternalServerError, got {:?}", other),
            }
        });
    }
}
