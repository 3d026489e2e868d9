//! xpns-fe library - Form Entry service
//!
//! Serves the expense entry form, owns the in-progress draft, and runs
//! the submission pipeline against the configured Sheets webhook.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod form;
pub mod services;

pub use form::FormState;
pub use services::SheetsClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The single draft for this editing session
    pub form: Arc<RwLock<FormState>>,
    /// Webhook client running the submission pipeline
    pub client: Arc<SheetsClient>,
    /// Advisory "is submitting" flag, held by the caller side of the
    /// pipeline and claimed with compare-exchange by the submit handler
    pub submitting: Arc<AtomicBool>,
    /// Service startup timestamp for uptime reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(client: SheetsClient) -> Self {
        Self {
            form: Arc::new(RwLock::new(FormState::new())),
            client: Arc::new(client),
            submitting: Arc::new(AtomicBool::new(false)),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::serve_index))
        .route("/health", get(api::health_check))
        .route("/api/draft", get(api::get_draft).patch(api::patch_draft))
        .route("/api/draft/reset", post(api::reset_draft))
        .route("/api/submit", post(api::submit_expense))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
