use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::adoption::ports::AdoptionServicePort;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Password;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Verifies credentials, sets the session cookie and answers with the public
/// user view.
pub async fn login<AS, FS>(
    State(state): State<AppState<AS, FS>>,
    jar: CookieJar,
    Json(body): Json<LoginRequestBody>,
) -> Result<(CookieJar, ApiSuccess<UserData>), ApiError>
where
    AS: AuthServicePort,
    FS: AdoptionServicePort,
{
    let command = LoginCommand {
        username: body.username,
        password: Password::new(body.password).map_err(UserError::from)?,
    };

    let session = state.auth_service.login(command).await?;

    let jar = jar.add(state.session_cookie.issue(session.token));

    Ok((jar, ApiSuccess::new(StatusCode::OK, (&session.user).into())))
}

#[derive(Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}
