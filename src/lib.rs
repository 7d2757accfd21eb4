pub mod api;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod middleware;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::{config::Config, infrastructure::store::ProfileStore};

pub struct AppState<S> {
    pub config: Arc<Config>,
    pub store: Arc<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            store: Arc::clone(&self.store),
        }
    }
}

pub fn build_router<S: ProfileStore>(state: AppState<S>) -> Router {
    let max_concurrent_requests = state.config.server.max_concurrent_requests;

    Router::new()
        .merge(api::router::<S>())
        .layer(axum::middleware::map_response(
            middleware::cors::apply_cors_headers,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::logging::make_log_span)
                .on_request(())
                .on_eos(()),
        )
        .layer(ConcurrencyLimitLayer::new(max_concurrent_requests))
        .with_state(state)
}
