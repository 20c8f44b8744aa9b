//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors go through the
//! feature crates' error types.

use std::env;
use std::net::SocketAddr;

use auth::middleware::TokenGuardState;
use auth::{AuthConfig, PgAdminRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use progress::{PgProgressRepository, progress_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,progress=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let mut auth_config = if app_env == "production" {
        // In production, the signing secret must come from the environment
        let token_secret =
            env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
        AuthConfig {
            token_secret,
            ..AuthConfig::default()
        }
    } else {
        match env::var("TOKEN_SECRET") {
            Ok(token_secret) => AuthConfig {
                token_secret,
                ..AuthConfig::default()
            },
            // Development fallback: random per-process secret
            Err(_) => AuthConfig::development(),
        }
    };
    auth_config.bootstrap_password = env::var("ADMIN_PASSWORD").ok();

    let guard = TokenGuardState::new(&auth_config);

    let admin_store = PgAdminRepository::new(pool.clone());
    let progress_store = PgProgressRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let api = auth_router(admin_store, auth_config)
        .merge(progress_router(progress_store, guard));

    let app = Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
