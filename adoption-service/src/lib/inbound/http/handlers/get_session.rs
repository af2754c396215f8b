use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::adoption::ports::AdoptionServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_session<AS, FS>(
    State(state): State<AppState<AS, FS>>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<UserData>, ApiError>
where
    AS: AuthServicePort,
    FS: AdoptionServicePort,
{
    state
        .auth_service
        .current_user(&authenticated.user_id)
        .await
        .map_err(ApiError::from)
        .map(|user| ApiSuccess::new(StatusCode::OK, (&user).into()))
}
