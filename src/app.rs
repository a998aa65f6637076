use std::sync::Arc;

use axum::Router;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::routes;
use crate::utils::config::DataConfig;
use crate::utils::middleware;

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<DataConfig>,
}

pub fn build_app(data: DataConfig) -> Router {
    let static_dir = data.static_dir.clone();
    let state = AppState {
        data: Arc::new(data),
    };

    routes::build_routes(&static_dir)
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
