//! Password hashing utilities

use bcrypt::{hash, verify};

/// Hash with an explicit bcrypt cost; tests use the minimum to stay fast.
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}
