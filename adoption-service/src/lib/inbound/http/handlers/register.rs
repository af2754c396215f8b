use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use crate::domain::adoption::ports::AdoptionServicePort;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::Profile;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordError;
use crate::user::errors::UsernameError;

pub const USER_CREATED_MESSAGE: &str = "User has been created.";

pub async fn register<AS, FS>(
    State(state): State<AppState<AS, FS>>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<(StatusCode, &'static str), ApiError>
where
    AS: AuthServicePort,
    FS: AdoptionServicePort,
{
    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|_| (StatusCode::CREATED, USER_CREATED_MESSAGE))
}

/// HTTP request body for registration (raw JSON)
///
/// `isSeller` is accepted as an alias so browser clients can post their
/// camelCase form state unchanged.
#[derive(Deserialize)]
pub struct RegisterRequestBody {
    username: String,
    password: String,
    #[serde(default, alias = "isSeller")]
    is_seller: bool,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    img: Option<String>,
    #[serde(default, alias = "desc")]
    description: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordError),
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        let username = Username::new(self.username)?;
        let password = Password::new(self.password)?;
        let email = non_blank(self.email).map(EmailAddress::new).transpose()?;

        let profile = Profile {
            email,
            phone: non_blank(self.phone),
            img: non_blank(self.img),
            description: non_blank(self.description),
        };

        Ok(RegisterUserCommand::new(
            username,
            password,
            self.is_seller,
            profile,
        ))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
