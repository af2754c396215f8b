use std::sync::Arc;

use auth::Authenticator;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use super::handlers::ApiError;
use super::session_cookie::ACCESS_TOKEN_COOKIE;
use crate::domain::user::models::UserId;

/// Extension type to store the authenticated user ID in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates the session token and adds the caller to request
/// extensions.
///
/// The token is read from the `accessToken` cookie, falling back to an
/// `Authorization: Bearer` header for non-browser clients.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token(req.headers())
        .ok_or_else(|| unauthorized("Not authenticated."))?;

    let claims = authenticator.validate_token(&token).map_err(|e| {
        tracing::warn!(error = %e, "Session token rejected");
        match e {
            JwtError::TokenExpired => unauthorized("Session has expired."),
            _ => unauthorized("Invalid session token."),
        }
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse user ID from token");
        unauthorized("Invalid session token.")
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn unauthorized(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}
