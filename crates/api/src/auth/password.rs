//! Password hashing and verification using Argon2id.

use argon2::{
    password_hash::{rand_core::OsRng, Error, PasswordHash, PasswordHasher, SaltString},
    Argon2, PasswordVerifier,
};

/// Hash a plaintext password with Argon2id and a random salt.
///
/// Returns the PHC-format hash string suitable for storage.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// Returns `Ok(false)` for a wrong password; errors are reserved for
/// malformed hashes.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Check a candidate password against the minimum length policy.
///
/// Returns a human-readable rejection message on failure.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.len() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"));

        let ok = verify_password("correct horse battery staple", &hash)
            .expect("verification should succeed");
        assert!(ok);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let hash = hash_password("right-password").expect("hashing should succeed");

        let ok = verify_password("wrong-password", &hash).expect("verification should succeed");
        assert!(!ok, "wrong password must not verify");
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let result = verify_password("whatever", "not-a-phc-hash");
        assert!(result.is_err());
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash_password("same-password").expect("hashing should succeed");
        let b = hash_password("same-password").expect("hashing should succeed");
        assert_ne!(a, b, "random salts must produce distinct hashes");
    }

    #[test]
    fn strength_check_enforces_min_length() {
        assert!(validate_password_strength("1234567", 8).is_err());
        assert!(validate_password_strength("12345678", 8).is_ok());

        let msg = validate_password_strength("short", 10).unwrap_err();
        assert!(msg.contains("at least 10 characters"));
    }
}
