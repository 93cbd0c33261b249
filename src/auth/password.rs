use crate::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Hashes a cleartext password for storage. bcrypt salts internally, so two
/// calls for the same input produce different strings.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Checks a cleartext password against a stored bcrypt hash. Returns
/// `Ok(false)` on mismatch; errors only when the stored hash is malformed.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    Ok(verify(password, stored_hash)?)
}
