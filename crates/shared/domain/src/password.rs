//! Password value object.
//!
//! Wraps a one-way argon2 digest. The plaintext is only ever borrowed while
//! hashing or verifying and is never stored.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{DomainError, DomainResult};

/// Hashed password in PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Argon2 is memory-hard and deliberately slow; callers on an async
    /// runtime should run this on a blocking thread.
    ///
    /// # Errors
    /// Returns [`DomainError::Hash`] if the primitive fails.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::hash(e.to_string()))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap an existing digest (read back from the store).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the digest for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the digest.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a candidate plaintext against this digest.
    ///
    /// A mismatch is `Ok(false)`, not an error. Errors are reserved for a
    /// digest that cannot be parsed or a failure inside the primitive.
    pub fn verify(&self, plain_text: &str) -> DomainResult<bool> {
        let parsed = PasswordHash::new(&self.hash)
            .map_err(|e| DomainError::malformed_digest(e.to_string()))?;

        match Self::argon2().verify_password(plain_text.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DomainError::hash(e.to_string())),
        }
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}
