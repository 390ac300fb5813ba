//! API server initialization

use std::net::SocketAddr;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;

use tower_http::compression::CompressionLayer;

use super::embedded;
use super::middleware::{self, AllowedOrigins};
use super::openapi::{openapi_json, swagger_ui_html};
use super::routes::{analytics, dates, exercises, health, metrics, profile, workouts};
use crate::core::CoreApp;
use crate::core::constants::DEFAULT_BODY_LIMIT;

pub struct ApiServer {
    app: CoreApp,
    allowed_origins: AllowedOrigins,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        let allowed_origins = AllowedOrigins::new(&app.config.server.host, app.config.server.port);

        Self {
            app,
            allowed_origins,
        }
    }

    /// Returns CoreApp for graceful shutdown
    pub async fn start(self) -> Result<CoreApp> {
        let Self {
            app,
            allowed_origins,
        } = self;

        // Clone shutdown before moving app
        let shutdown = app.shutdown.clone();

        let host = app.config.server.host.clone();
        let port = app.config.server.port;
        let addr = SocketAddr::new(host.parse()?, port);

        let database = &app.database;

        let api_routes = Router::new()
            .route("/health", get(health::health))
            .route("/openapi.json", get(openapi_json))
            .route("/docs", get(swagger_ui_html))
            .nest("/usuario", profile::routes(database.clone()))
            .nest("/dates", dates::routes(database.clone()))
            .nest("/kcal", metrics::kcal_routes(database.clone()))
            .nest("/water", metrics::water_routes(database.clone()))
            .nest("/sleep", metrics::sleep_routes(database.clone()))
            .nest("/exercise_names", exercises::routes(database.clone()))
            .nest("/workouts", workouts::routes(database.clone()))
            .nest("/analytics", analytics::routes(database.clone()))
            .fallback(middleware::handle_404);

        // Anything outside /api falls through to the embedded shell
        let router = Router::new()
            .nest("/api", api_routes)
            .fallback(embedded::serve_assets)
            .layer(CompressionLayer::new())
            .layer(middleware::cors(&allowed_origins))
            .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT));

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        Ok(app)
    }
}
