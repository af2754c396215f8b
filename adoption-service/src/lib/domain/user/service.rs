use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::SessionClaims;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::PasswordDigest;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::PasswordError;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for registration and login.
///
/// Sessions are stateless: nothing is persisted on login, the signed token is
/// the only record of an authenticated session.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    session_ttl: Option<Duration>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hasher and token signer
    /// * `session_ttl` - Lifetime of issued tokens, `None` for no expiration
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        session_ttl: Option<Duration>,
    ) -> Self {
        Self {
            repository,
            authenticator,
            session_ttl,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let digest = self
            .authenticator
            .hash_password(command.password.expose())
            .map_err(|e| match e {
                auth::PasswordError::EmptyPassword => UserError::from(PasswordError::Empty),
                other => UserError::Credentials(other.to_string()),
            })?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            password_digest: PasswordDigest::new(digest),
            is_seller: command.is_seller,
            profile: command.profile,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            is_seller = created_user.is_seller,
            "User registered"
        );

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<Session, UserError> {
        let user = match Username::new(command.username) {
            Ok(username) => self.repository.find_by_username(&username).await?,
            Err(_) => None,
        }
        .ok_or(UserError::NotFound)?;

        let claims = SessionClaims::issue(user.id, user.is_seller, self.session_ttl);

        let result = self
            .authenticator
            .authenticate(command.password.expose(), user.password_digest.as_str(), &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::BadCredentials,
                AuthenticationError::PasswordError(err) => {
                    UserError::Credentials(format!("Password verification failed: {}", err))
                }
                AuthenticationError::JwtError(err) => {
                    UserError::Credentials(format!("Token generation failed: {}", err))
                }
            })?;

        tracing::info!(user_id = %user.id, "Session issued");

        Ok(Session {
            token: result.access_token,
            user,
        })
    }

    async fn current_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }
}
