use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;

use crate::domain::adoption::ports::AdoptionServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub const LOGGED_OUT_MESSAGE: &str = "User has been logged out.";

/// Always answers with a removal cookie, whether or not the request carried a
/// session.
pub async fn logout<AS, FS>(
    State(state): State<AppState<AS, FS>>,
    jar: CookieJar,
) -> (CookieJar, &'static str)
where
    AS: AuthServicePort,
    FS: AdoptionServicePort,
{
    (jar.add(state.session_cookie.expire()), LOGGED_OUT_MESSAGE)
}
