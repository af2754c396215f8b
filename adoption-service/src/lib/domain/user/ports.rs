use async_trait::async_trait;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Hash the password and persist a new user.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Credentials` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue a session token.
    ///
    /// # Errors
    /// * `NotFound` - No user with this username
    /// * `BadCredentials` - Password does not match
    /// * `Credentials` - Stored digest unreadable or token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<Session, UserError>;

    /// Resolve the user behind an authenticated session.
    ///
    /// # Errors
    /// * `NotFound` - User no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn current_user(&self, id: &UserId) -> Result<User, UserError>;
}

/// Persistence operations for user records.
///
/// Implementations enforce username (and email) uniqueness atomically.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
