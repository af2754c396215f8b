use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_session::get_session;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::register::register;
use super::handlers::save_form::save_form;
use super::middleware::authenticate as session_middleware;
use super::session_cookie::SessionCookie;
use crate::domain::adoption::ports::AdoptionServicePort;
use crate::domain::user::ports::AuthServicePort;

pub struct AppState<AS, FS>
where
    AS: AuthServicePort,
    FS: AdoptionServicePort,
{
    pub auth_service: Arc<AS>,
    pub adoption_service: Arc<FS>,
    pub authenticator: Arc<Authenticator>,
    pub session_cookie: SessionCookie,
}

impl<AS, FS> Clone for AppState<AS, FS>
where
    AS: AuthServicePort,
    FS: AdoptionServicePort,
{
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            adoption_service: Arc::clone(&self.adoption_service),
            authenticator: Arc::clone(&self.authenticator),
            session_cookie: self.session_cookie,
        }
    }
}

pub fn create_router<AS, FS>(state: AppState<AS, FS>, allowed_origins: &[String]) -> Router
where
    AS: AuthServicePort,
    FS: AdoptionServicePort,
{
    let public_routes = Router::new()
        .route("/api/auth/register", post(register::<AS, FS>))
        .route("/api/auth/login", post(login::<AS, FS>))
        .route("/api/auth/logout", post(logout::<AS, FS>))
        .route("/form/save", post(save_form::<AS, FS>));

    let protected_routes = Router::new()
        .route("/api/auth/session", get(get_session::<AS, FS>))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.authenticator),
            session_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// Browsers only attach the session cookie to cross-origin requests when the
/// origin is listed explicitly and credentials are allowed.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
