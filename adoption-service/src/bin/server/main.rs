use std::sync::Arc;

use adoption_service::config::Config;
use adoption_service::domain::adoption::service::AdoptionService;
use adoption_service::domain::user::service::AuthService;
use adoption_service::inbound::http::router::create_router;
use adoption_service::inbound::http::router::AppState;
use adoption_service::inbound::http::session_cookie::SessionCookie;
use adoption_service::outbound::repositories::PostgresAdoptionFormRepository;
use adoption_service::outbound::repositories::PostgresUserRepository;
use auth::Authenticator;
use auth::PasswordHasher;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adoption_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "adoption-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        allowed_origins = ?config.server.allowed_origins,
        session_expiration_hours = ?config.session.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = PasswordHasher::with_work_factor(config.password.into())?;
    let authenticator = Arc::new(Authenticator::with_hasher(
        config.session.secret.as_bytes(),
        password_hasher,
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let form_repository = Arc::new(PostgresAdoptionFormRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&authenticator),
        config.session.expiration_hours.map(Duration::hours),
    ));
    let adoption_service = Arc::new(AdoptionService::new(form_repository));

    let state = AppState {
        auth_service,
        adoption_service,
        authenticator,
        session_cookie: SessionCookie::from_config(&config.session),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, &config.server.allowed_origins);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
