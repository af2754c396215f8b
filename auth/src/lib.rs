//! Authentication primitives for the adoption platform
//!
//! - Password hashing (Argon2id, configurable work factor)
//! - Session token signing and verification (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest).unwrap());
//! assert!(!hasher.verify("not_my_password", &digest).unwrap());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, SessionClaims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let digest = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token without expiration
//! let claims = SessionClaims::issue("user123", false, None);
//! let result = auth.authenticate("password123", &digest, &claims).unwrap();
//!
//! // Later requests: validate token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::WorkFactor;
