use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Cost parameters applied when producing new digests.
///
/// Verification always uses the parameters embedded in the stored PHC string,
/// so raising the work factor does not invalidate existing digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkFactor {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes over memory
    pub iterations: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for WorkFactor {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Salted one-way password hasher (Argon2id).
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the library's recommended work factor.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a hasher with an explicit work factor.
    ///
    /// # Errors
    /// * `InvalidWorkFactor` - Parameters are outside the ranges Argon2 accepts
    pub fn with_work_factor(work_factor: WorkFactor) -> Result<Self, PasswordError> {
        let params = Params::new(
            work_factor.memory_kib,
            work_factor.iterations,
            work_factor.parallelism,
            None,
        )
        .map_err(|e| PasswordError::InvalidWorkFactor(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password into a PHC string digest.
    ///
    /// A fresh random salt is generated for every call, so hashing the same
    /// password twice yields different digests.
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is an empty string
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }

        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// # Returns
    /// `true` if the password matches, `false` on mismatch
    ///
    /// # Errors
    /// * `VerificationFailed` - Digest is malformed or verification could not run
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(digest).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> PasswordHasher {
        PasswordHasher::with_work_factor(WorkFactor {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("valid work factor")
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "secret1";

        let digest = hasher.hash(password).expect("Failed to hash password");

        assert!(digest.starts_with("$argon2id$"));
        assert_ne!(digest, password);
        assert!(hasher
            .verify(password, &digest)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("wrong", &digest)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = cheap_hasher();

        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &first).unwrap());
        assert!(hasher.verify("secret1", &second).unwrap());
    }

    #[test]
    fn test_custom_work_factor_is_encoded_in_digest() {
        let digest = cheap_hasher().hash("secret1").unwrap();

        assert!(digest.contains("m=1024,t=1,p=1"));
        // Any hasher can verify, parameters come from the digest itself
        assert!(PasswordHasher::new().verify("secret1", &digest).unwrap());
    }

    #[test]
    fn test_empty_password_is_rejected() {
        let result = cheap_hasher().hash("");
        assert!(matches!(result, Err(PasswordError::EmptyPassword)));
    }

    #[test]
    fn test_invalid_work_factor() {
        let result = PasswordHasher::with_work_factor(WorkFactor {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        });
        assert!(matches!(result, Err(PasswordError::InvalidWorkFactor(_))));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let result = cheap_hasher().verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }
}
