//! HTTP adapter
//!
//! Serves the predictor over a small JSON API with axum. One
//! [`SequencePredictor`] is created at startup and shared by every handler
//! through [`AppState`].
//!
//! | Method | Path | Body |
//! |---|---|---|
//! | POST | /api/predict | `{"sequence": [..]}` |
//! | POST | /api/validate | `{"sequence": [..]}` |
//! | GET | /api/memories | |
//! | DELETE | /api/memories | |
//! | GET | /api/test | |
//! | GET | /health | |
//! | GET | / | |

mod error;
mod page;
pub mod routes;

pub use error::ApiError;

use anyhow::{Context, Result};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::predictor::SequencePredictor;

/// State shared across handlers
#[derive(Clone, Default)]
pub struct AppState {
    predictor: Arc<Mutex<SequencePredictor>>,
}

impl AppState {
    pub fn new(predictor: SequencePredictor) -> Self {
        Self {
            predictor: Arc::new(Mutex::new(predictor)),
        }
    }

    /// Lock the predictor for one core call
    pub fn lock(&self) -> Result<MutexGuard<'_, SequencePredictor>, ApiError> {
        self.predictor
            .lock()
            .map_err(|_| ApiError::Internal("predictor state is poisoned".to_string()))
    }
}

/// Turn a handler panic into the JSON 500 body
fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(detail).into_response()
}

/// Build the router with middleware
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/api/predict", post(routes::predict))
        .route("/api/validate", post(routes::validate))
        .route(
            "/api/memories",
            get(routes::list_memories).delete(routes::clear_memories),
        )
        .route("/api/test", get(routes::self_test))
        .fallback(routes::not_found);

    with_middleware(routes).with_state(state)
}

/// Panic catching, request tracing and permissive CORS
fn with_middleware<S>(routes: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind `host:port` and serve until Ctrl-C
pub async fn serve(host: &str, port: u16, predictor: SequencePredictor) -> Result<()> {
    let app = router(AppState::new(predictor));
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    let local = listener
        .local_addr()
        .context("Failed to read bound address")?;

    info!("progression v{} listening on http://{}", env!("CARGO_PKG_VERSION"), local);
    eprintln!("   Listening on http://{}", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutdown requested");
        })
        .await
        .context("HTTP server failed")?;

    Ok(())
}
