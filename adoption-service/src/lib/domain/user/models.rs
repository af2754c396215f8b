use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::PasswordError;
use crate::user::errors::UserIdError;
use crate::user::errors::UsernameError;

/// Registered platform user.
///
/// `Debug` output never includes the password digest.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_digest: PasswordDigest,
    pub is_seller: bool,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
}

/// Optional profile fields supplied at registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub email: Option<EmailAddress>,
    pub phone: Option<String>,
    pub img: Option<String>,
    pub description: Option<String>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Any non-blank string up to 128 characters. Stored exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 128;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Blank` - Username is empty or whitespace only
    /// * `TooLong` - Username longer than 128 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.trim().is_empty() {
            return Err(UsernameError::Blank);
        }

        let length = username.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password supplied by a client.
///
/// Only lives for the duration of a register or login call. `Debug` is
/// redacted so the value cannot end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// # Errors
    /// * `Empty` - Password is an empty string
    pub fn new(password: String) -> Result<Self, PasswordError> {
        if password.is_empty() {
            Err(PasswordError::Empty)
        } else {
            Ok(Self(password))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// One-way digest of a password as produced by the password hasher.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    pub fn new(digest: String) -> Self {
        Self(digest)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub password: Password,
    pub is_seller: bool,
    pub profile: Profile,
}

impl RegisterUserCommand {
    pub fn new(username: Username, password: Password, is_seller: bool, profile: Profile) -> Self {
        Self {
            username,
            password,
            is_seller,
            profile,
        }
    }
}

/// Command to log a user in.
///
/// The username stays raw: a name that would fail validation cannot belong
/// to any stored user and is reported as not found. `Debug` never shows the
/// password.
#[derive(Debug)]
pub struct LoginCommand {
    pub username: String,
    pub password: Password,
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}
