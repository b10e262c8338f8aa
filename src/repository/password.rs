use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::RepositoryError;

pub fn hash_password(password: &str) -> Result<String, RepositoryError> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| RepositoryError::Password(e.to_string()))
}

/// A stored value that is not a valid PHC string counts as a mismatch.
pub fn verify_password(password: &str, hashed: &str) -> Result<(), RepositoryError> {
    let argon2 = Argon2::default();
    let parsed = PasswordHash::new(hashed).map_err(|_| RepositoryError::InvalidCredentials)?;

    argon2
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| RepositoryError::InvalidCredentials)
}
