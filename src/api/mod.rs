use axum::{Router, handler::HandlerWithoutStateExt, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::services::DirectoryService;
use crate::state::SharedState;

mod assets;
mod error;
mod observability;
mod pages;
mod views;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn directory(&self) -> &Arc<dyn DirectoryService> {
        &self.shared.directory
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let uploads = ServeDir::new(&state.config().server.uploads_path)
        .not_found_service(pages::not_found.into_service());

    Router::new()
        .route("/", get(pages::index))
        .route("/profile/{slug}", get(pages::profile))
        .route("/search", get(pages::search))
        .route("/static/{*path}", get(assets::serve_asset))
        .route("/metrics", get(observability::get_metrics))
        .nest_service("/uploads", uploads)
        .fallback(pages::not_found)
        .with_state(state)
        .layer(middleware::from_fn(observability::logging_middleware))
        .layer(middleware::from_fn(
            observability::security_headers_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}
