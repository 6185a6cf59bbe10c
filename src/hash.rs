use crate::error::SeedError;

/// Salted bcrypt hash of `plain` at the given cost factor.
pub fn hash_password(plain: &str, cost: u32) -> Result<String, SeedError> {
    Ok(bcrypt::hash(plain, cost)?)
}

pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, SeedError> {
    Ok(bcrypt::verify(plain, hashed)?)
}
