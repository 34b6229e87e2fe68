//! Mergington Activities
//!
//! Extracurricular activity signups for Mergington High School. Students
//! browse the catalogue, join an activity by email and leave it again.
//!
//! # Endpoints
//! - `GET /` redirects to the landing page at `/static/index.html`
//! - `GET /activities` lists every activity keyed by name
//! - `POST /activities/{name}/signup?email=...` joins an activity
//! - `DELETE /activities/{name}/unregister?email=...` leaves an activity
//! - `GET /health` reports service status
//!
//! Rejections come back as `{"detail": "..."}` with 404 for unknown
//! activities or students and 400 for duplicate signups.

use std::path::Path;

use anyhow::{Context, Result};
use axum::{
    http::header::{HeaderValue, CACHE_CONTROL},
    routing::{delete, get, post},
    Router,
};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod registry;
pub mod routes;

use config::Config;
use registry::Registry;
use routes::AppState;

/// Build the application router around a registry
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let api = Router::new()
        .route("/activities", get(routes::list_activities))
        .route("/activities/:activity_name/signup", post(routes::signup))
        .route(
            "/activities/:activity_name/unregister",
            delete(routes::unregister),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health_check))
        .merge(api)
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Install the global subscriber, `info` unless `RUST_LOG` says otherwise
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Seed the registry and serve until Ctrl+C or SIGTERM
pub async fn start_server(config: Config) -> Result<()> {
    let registry = Registry::seeded_with(config.capacity_policy());
    let listing = registry.list_activities().await;
    if listing.is_empty() {
        warn!("Activity catalogue is empty");
    }
    info!(
        "Loaded {} activities (capacity {})",
        listing.len(),
        registry.policy().await
    );

    if !config.static_dir.is_dir() {
        warn!(
            "Static directory {} not found, landing page will 404",
            config.static_dir.display()
        );
    }

    let app = router(AppState::new(registry), &config.static_dir);

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Activities service listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => warn!("Failed to listen for Ctrl+C: {}", e),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
