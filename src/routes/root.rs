use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::page::{healthz, index};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
}
